//! Instruction classifier for promptplan.
//!
//! Converts one free-text instruction ("buy milk and call the dentist",
//! "remind me to submit the report tomorrow, urgent") into a validated
//! [`ActionPlan`](pp_protocol::ActionPlan).
//!
//! Two paths:
//! - **Generative** (optional): an injected [`GenerativeBackend`] classifies
//!   the whole instruction against a fixed schema template. Any failure is
//!   soft and falls through.
//! - **Deterministic**: the instruction is segmented, each segment is matched
//!   against the pattern library, and the segment results are aggregated.
//!
//! Either way the candidate plan passes the schema validator before it is
//! returned. [`PlanAssembler::classify`] never fails; the worst outcome is an
//! empty plan with a rationale.

pub mod assembler;
pub mod config;
pub mod error;
pub mod extract;
pub mod generative;
pub mod mock;
pub mod patterns;
pub mod rules;
pub mod segment;
pub mod validate;

pub use assembler::PlanAssembler;
pub use config::{ClassifierConfig, GenerativeConfig};
pub use error::{
    ConfigError, ConfigResult, GenerativeError, GenerativeResult, ValidationError,
    ValidationResult,
};
pub use generative::{GenerativeAugmenter, GenerativeBackend, OllamaBackend};
pub use mock::MockBackend;
pub use rules::{RuleClassifier, SegmentOutcome};
pub use segment::segment;
