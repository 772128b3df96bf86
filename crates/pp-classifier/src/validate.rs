//! Schema validator: the single gate every candidate plan passes before it
//! leaves the classifier.
//!
//! Rejection is whole-plan. A plan with one bad action is replaced by the
//! empty plan, never trimmed down to the good actions.

use serde_json::Value;

use pp_protocol::{Action, ActionPlan, VALIDATION_FAILED};

use crate::error::{ValidationError, ValidationResult};

/// Decode an untrusted candidate and apply the semantic rules.
///
/// Unknown action tags, unknown enum values, and wrong primitive shapes fail
/// decoding and surface as [`ValidationError::Schema`].
pub fn validate_value(value: Value) -> ValidationResult<ActionPlan> {
    let plan: ActionPlan =
        serde_json::from_value(value).map_err(|e| ValidationError::Schema(e.to_string()))?;
    validate(&plan)?;
    Ok(plan)
}

/// Check the rules the type system cannot express.
pub fn validate(plan: &ActionPlan) -> ValidationResult<()> {
    if !plan.confidence.is_finite() || !(0.0..=1.0).contains(&plan.confidence) {
        return Err(ValidationError::Confidence(plan.confidence));
    }
    for (index, action) in plan.actions.iter().enumerate() {
        check_action(action).map_err(|reason| ValidationError::Action {
            index,
            kind: action.kind(),
            reason: reason.into(),
        })?;
    }
    Ok(())
}

fn check_action(action: &Action) -> Result<(), &'static str> {
    match action {
        Action::CreateRecord { title, .. } => {
            if is_blank(title) {
                return Err("title is blank");
            }
        }
        Action::UpdateRecord { record_id, updates } => {
            if is_blank(record_id) {
                return Err("record_id is blank");
            }
            if updates.is_empty() {
                return Err("updates carry no fields");
            }
            if updates.title.as_deref().is_some_and(is_blank) {
                return Err("updated title is blank");
            }
        }
        Action::LogEvent { payload, .. } => {
            if !payload.is_object() {
                return Err("payload is not an object");
            }
        }
        Action::Navigate { destination } => {
            if is_blank(destination) {
                return Err("destination is blank");
            }
        }
    }
    Ok(())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Return `plan` if it validates, otherwise the empty "validation failed" plan.
pub fn admit(plan: ActionPlan) -> ActionPlan {
    match validate(&plan) {
        Ok(()) => plan,
        Err(e) => reject(&e),
    }
}

/// Decode and admit an untrusted candidate.
pub fn admit_value(value: Value) -> ActionPlan {
    validate_value(value).unwrap_or_else(|e| reject(&e))
}

fn reject(error: &ValidationError) -> ActionPlan {
    tracing::warn!(error = %error, "candidate plan rejected");
    ActionPlan::empty(VALIDATION_FAILED)
}
