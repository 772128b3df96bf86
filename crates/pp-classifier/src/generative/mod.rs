//! Generative augmenter: whole-instruction classification by an external
//! text-generation service, constrained to the action plan contract.
//!
//! Every failure here is soft. [`GenerativeAugmenter::propose`] returns
//! `None` and the caller falls back to the rule-based path.

pub mod ollama;
pub mod reply;
pub mod template;

pub use ollama::OllamaBackend;
pub use template::SYSTEM_TEMPLATE;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use pp_protocol::ActionPlan;

use crate::config::GenerativeConfig;
use crate::error::{GenerativeError, GenerativeResult};
use crate::validate::validate_value;

/// A text-generation service that answers one instruction under a system
/// template.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Send `instruction` with the `system` template and return the raw reply.
    async fn generate(&self, system: &str, instruction: &str) -> GenerativeResult<String>;

    /// Short name used in logs.
    fn backend_name(&self) -> &str;
}

/// Wraps a backend with the timeout, reply extraction, validation, and
/// confidence gate that make its output trustworthy.
#[derive(Clone)]
pub struct GenerativeAugmenter {
    backend: Arc<dyn GenerativeBackend>,
    timeout: Duration,
    min_confidence: f64,
}

impl GenerativeAugmenter {
    pub fn new(backend: Arc<dyn GenerativeBackend>, config: &GenerativeConfig) -> Self {
        Self::with_limits(backend, config.timeout(), config.min_confidence)
    }

    pub fn with_limits(
        backend: Arc<dyn GenerativeBackend>,
        timeout: Duration,
        min_confidence: f64,
    ) -> Self {
        Self {
            backend,
            timeout,
            min_confidence,
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Propose a plan for `instruction`, or `None` on any failure.
    pub async fn propose(&self, instruction: &str) -> Option<ActionPlan> {
        match self.try_propose(instruction).await {
            Ok(plan) => {
                tracing::debug!(
                    backend = self.backend_name(),
                    actions = plan.len(),
                    confidence = plan.confidence,
                    "generative plan accepted"
                );
                Some(plan)
            }
            Err(e @ (GenerativeError::EmptyPlan | GenerativeError::LowConfidence { .. })) => {
                tracing::debug!(backend = self.backend_name(), reason = %e, "generative plan discarded");
                None
            }
            Err(e) => {
                tracing::warn!(backend = self.backend_name(), error = %e, "generative path failed");
                None
            }
        }
    }

    /// Like [`propose`](Self::propose) but reports why a reply was refused.
    pub async fn try_propose(&self, instruction: &str) -> GenerativeResult<ActionPlan> {
        let raw = timeout(
            self.timeout,
            self.backend.generate(SYSTEM_TEMPLATE, instruction),
        )
        .await
        .map_err(|_| GenerativeError::Timeout {
            timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        })??;

        let object = reply::extract_object(&raw)?;
        let value: serde_json::Value = serde_json::from_str(object)
            .map_err(|e| GenerativeError::MalformedReply(e.to_string()))?;
        let plan = validate_value(value)?;

        if plan.is_empty() {
            return Err(GenerativeError::EmptyPlan);
        }
        if plan.confidence < self.min_confidence {
            return Err(GenerativeError::LowConfidence {
                confidence: plan.confidence,
                threshold: self.min_confidence,
            });
        }
        Ok(plan)
    }
}
