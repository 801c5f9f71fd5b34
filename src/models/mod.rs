//! The `ln Γ` approximation being calibrated.
//!
//! Implemented as small, pure functions so the metric and the reports can
//! share a single evaluation path.

pub mod model;

pub use model::*;
