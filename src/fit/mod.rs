//! Coefficient calibration.
//!
//! Responsibilities:
//!
//! - wrap the RMSE metric as the minimizer objective
//! - drive a fixed number of gradient-search steps
//! - hand periodic progress to the caller

pub mod calibrate;

pub use calibrate::*;
