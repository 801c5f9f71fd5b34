//! Mathematical utilities: the calibration error metric.

pub mod metric;

pub use metric::*;
