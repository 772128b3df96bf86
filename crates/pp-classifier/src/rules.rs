//! Rule-based classifier: maps one sub-instruction to at most one action
//! using the pattern library and the entity extractors.
//!
//! Never fails. Anything it cannot attribute to a category comes back as an
//! outcome with no action and a rationale saying why.

use chrono::NaiveDate;

use pp_protocol::{Action, Category, EMPTY_INSTRUCTION, NO_CLASSIFIABLE_INTENT};

use crate::extract::{extract_priority, extract_schedule, extract_title};
use crate::patterns::{
    DEFAULT_CATEGORY, DEFAULT_FALLBACK_CONFIDENCE, INTERROGATIVE_RE, MIN_INSTRUCTION_CHARS,
    NAVIGATION_RE, PATTERN_HIT_CONFIDENCE, match_category, refers_to_existing_record,
};

/// Rationale for phrases that act on a record the caller must identify.
pub const NEEDS_RECORD_CONTEXT: &str = "needs record context";

/// Result of classifying one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOutcome {
    pub action: Option<Action>,
    pub confidence: f64,
    pub rationale: String,
}

impl SegmentOutcome {
    fn none(rationale: impl Into<String>) -> Self {
        Self {
            action: None,
            confidence: 0.0,
            rationale: rationale.into(),
        }
    }
}

/// Pattern-matching classifier for single-intent instructions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one segment, resolving dates against `today`.
    pub fn classify_segment(&self, text: &str, today: NaiveDate) -> SegmentOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SegmentOutcome::none(EMPTY_INSTRUCTION);
        }

        if refers_to_existing_record(text) {
            tracing::debug!(segment = text, "segment refers to an existing record");
            return SegmentOutcome::none(NEEDS_RECORD_CONTEXT);
        }

        let (category, confidence, rationale) = match match_category(text) {
            Some(category) => (
                category,
                PATTERN_HIT_CONFIDENCE,
                format!("detected {category} creation"),
            ),
            None if is_actionable(text) => (
                DEFAULT_CATEGORY,
                DEFAULT_FALLBACK_CONFIDENCE,
                format!("defaulted to {DEFAULT_CATEGORY}"),
            ),
            None => return SegmentOutcome::none(NO_CLASSIFIABLE_INTENT),
        };

        SegmentOutcome {
            action: Some(build_create(category, text, today)),
            confidence,
            rationale,
        }
    }
}

/// Whether an unmatched segment still looks like something to do.
fn is_actionable(text: &str) -> bool {
    text.chars().count() >= MIN_INSTRUCTION_CHARS
        && !INTERROGATIVE_RE.is_match(text)
        && !NAVIGATION_RE.is_match(text)
}

fn build_create(category: Category, text: &str, today: NaiveDate) -> Action {
    Action::CreateRecord {
        category,
        title: extract_title(text),
        body: None,
        priority: extract_priority(text),
        schedule: extract_schedule(text, today),
    }
}
