//! Entity extractors: priority, schedule, and title.
//!
//! Extractors never fail. A missing match simply leaves the field unset.

pub mod priority;
pub mod schedule;
pub mod title;

pub use priority::extract_priority;
pub use schedule::extract_schedule;
pub use title::extract_title;
