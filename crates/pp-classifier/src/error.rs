//! Classifier error types.
//!
//! None of these escape [`PlanAssembler::classify`](crate::PlanAssembler::classify):
//! generative errors trigger the deterministic fallback and validation errors
//! degrade the plan to an empty one.

use thiserror::Error;

/// Why a candidate plan was rejected by the schema validator.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("schema violation: {0}")]
    Schema(String),

    #[error("confidence {0} is outside [0, 1]")]
    Confidence(f64),

    #[error("action {index} ({kind}): {reason}")]
    Action {
        index: usize,
        kind: &'static str,
        reason: String,
    },
}

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Soft failures of the generative path.
#[derive(Debug, Error)]
pub enum GenerativeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned HTTP {status}")]
    Status { status: u16 },

    #[error("no reply after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("malformed reply: {0}")]
    MalformedReply(String),

    #[error("reply failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("reply contained no actions")]
    EmptyPlan,

    #[error("confidence {confidence} below threshold {threshold}")]
    LowConfidence { confidence: f64, threshold: f64 },
}

/// Convenience alias for generative results.
pub type GenerativeResult<T> = Result<T, GenerativeError>;

/// Errors loading classifier configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
