use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Rationale of the plan returned for blank input.
pub const EMPTY_INSTRUCTION: &str = "empty instruction";
/// Rationale of the plan returned when no segment yields an action.
pub const NO_CLASSIFIABLE_INTENT: &str = "no classifiable intent";
/// Rationale of the plan that replaces a candidate failing validation.
pub const VALIDATION_FAILED: &str = "validation failed";

/// Ordered list of actions derived from one instruction.
///
/// Action order is construction order and is significant: executing the
/// actions in order must reproduce the same effect on every replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f64,
    /// Human-readable explanation of how the plan was derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl ActionPlan {
    pub fn new(actions: Vec<Action>, confidence: f64, rationale: impl Into<String>) -> Self {
        Self {
            actions,
            confidence,
            rationale: Some(rationale.into()),
        }
    }

    /// Plan with zero actions and confidence 0. A valid terminal outcome.
    pub fn empty(rationale: impl Into<String>) -> Self {
        Self::new(Vec::new(), 0.0, rationale)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
