//! Machine-readable output.

pub mod summary;

pub use summary::{RunSummary, write_summary_json};
