//! End-to-end tests for promptplan live under `tests/`. This crate has no
//! library code.
