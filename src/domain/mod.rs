//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the reference sample record (`Sample`)
//! - run configuration (`CalibrationConfig`, `GradientSearchParams`, `ReferenceSource`, `OutputFormat`)
//! - calibration outputs (`Progress`, `SampleResidual`)

pub mod types;

pub use types::*;
