//! Plan assembler: the single public entry point.
//!
//! Per request: blank check → generative attempt on the whole instruction
//! (when configured) → on any failure, segment → classify each segment →
//! aggregate → validate. Holds no per-request state, so one instance can be
//! shared behind an `Arc` by any number of concurrent requests.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::Instrument;

use pp_protocol::{ActionPlan, EMPTY_INSTRUCTION};

use crate::config::ClassifierConfig;
use crate::generative::{GenerativeAugmenter, OllamaBackend};
use crate::rules::{RuleClassifier, SegmentOutcome};
use crate::segment::segment;
use crate::validate;

/// Turns free-text instructions into validated action plans.
#[derive(Clone)]
pub struct PlanAssembler {
    rules: RuleClassifier,
    generative: Option<GenerativeAugmenter>,
}

impl PlanAssembler {
    /// Assembler with an optional generative capability.
    pub fn new(generative: Option<GenerativeAugmenter>) -> Self {
        Self {
            rules: RuleClassifier::new(),
            generative,
        }
    }

    /// Assembler that only ever uses the rule-based path.
    pub fn deterministic() -> Self {
        Self::new(None)
    }

    /// Build from configuration. An enabled but unbuildable generative
    /// backend is logged and skipped.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        if !config.generative.enabled {
            return Self::deterministic();
        }
        match OllamaBackend::new(&config.generative) {
            Ok(backend) => {
                tracing::info!(
                    host = %config.generative.host,
                    model = %config.generative.model,
                    "generative classification enabled"
                );
                Self::new(Some(GenerativeAugmenter::new(
                    Arc::new(backend),
                    &config.generative,
                )))
            }
            Err(e) => {
                tracing::warn!(error = %e, "generative backend unavailable, using rules only");
                Self::deterministic()
            }
        }
    }

    pub fn has_generative(&self) -> bool {
        self.generative.is_some()
    }

    /// Classify `text`, resolving relative dates against the local date.
    pub async fn classify(&self, text: &str) -> ActionPlan {
        self.classify_on(text, chrono::Local::now().date_naive()).await
    }

    /// Classify `text`, resolving relative dates against `today`.
    pub async fn classify_on(&self, text: &str, today: NaiveDate) -> ActionPlan {
        let span = tracing::debug_span!(
            "classify",
            path = tracing::field::Empty,
            actions = tracing::field::Empty
        );
        async move {
            if text.trim().is_empty() {
                return ActionPlan::empty(EMPTY_INSTRUCTION);
            }

            if let Some(generative) = &self.generative
                && let Some(plan) = generative.propose(text).await
            {
                record_path("generative", &plan);
                return plan;
            }

            let plan = self.classify_deterministic(text, today);
            record_path("deterministic", &plan);
            plan
        }
        .instrument(span)
        .await
    }

    /// Rule-based path only: segment, classify each segment, aggregate, validate.
    pub fn classify_deterministic(&self, text: &str, today: NaiveDate) -> ActionPlan {
        if text.trim().is_empty() {
            return ActionPlan::empty(EMPTY_INSTRUCTION);
        }
        let outcomes: Vec<SegmentOutcome> = segment(text)
            .into_iter()
            .map(|s| self.rules.classify_segment(s, today))
            .collect();
        validate::admit(aggregate(outcomes))
    }
}

impl Default for PlanAssembler {
    fn default() -> Self {
        Self::deterministic()
    }
}

fn record_path(path: &str, plan: &ActionPlan) {
    let span = tracing::Span::current();
    span.record("path", path);
    span.record("actions", plan.len());
    tracing::debug!(
        path,
        actions = plan.len(),
        confidence = plan.confidence,
        "plan assembled"
    );
}

/// Concatenate segment actions in order. Confidence is the mean over all
/// segments (a segment without an action counts as 0), or 0 when no segment
/// produced an action.
fn aggregate(outcomes: Vec<SegmentOutcome>) -> ActionPlan {
    let segments = outcomes.len();
    let total: f64 = outcomes.iter().map(|o| o.confidence).sum();
    let rationale = outcomes
        .iter()
        .map(|o| o.rationale.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    let rationale = if segments > 1 {
        format!("split into {segments} segments: {rationale}")
    } else {
        rationale
    };

    let actions: Vec<_> = outcomes.into_iter().filter_map(|o| o.action).collect();
    let confidence = if actions.is_empty() {
        0.0
    } else {
        (total / segments as f64).clamp(0.0, 1.0)
    };

    ActionPlan::new(actions, confidence, rationale)
}
