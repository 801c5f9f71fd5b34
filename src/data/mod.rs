//! Reference data for the calibration.

pub mod samples;

pub use samples::{SAMPLE_COUNT, SAMPLES, load_samples, regenerate_samples, validate_samples};
