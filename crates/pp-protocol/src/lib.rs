//! Schema contract for promptplan action plans.
//!
//! Every type here is the closed, serde-encoded shape that the classifier
//! produces and that downstream executors consume. Nothing in this crate
//! performs I/O.

pub mod action;
pub mod kinds;
pub mod plan;
pub mod schedule;

pub use action::*;
pub use kinds::*;
pub use plan::*;
pub use schedule::*;
