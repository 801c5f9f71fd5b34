//! Root-mean-square error of the approximation over a sample table.
//!
//! ```text
//! rmse(c) = sqrt( Σ (g(z_i; c) − ref_i)² / n )
//! ```
//!
//! This is the objective handed to the minimizer, so it reads the table and
//! the coefficients only and never mutates anything.

use crate::domain::Sample;
use crate::models::predict;

/// Sum of squared errors.
pub fn sse(samples: &[Sample], coeffs: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| {
            let e = predict(s.z, coeffs) - s.lngamma;
            e * e
        })
        .sum()
}

/// RMSE of `predict(·, coeffs)` against the table. Empty tables score 0.
pub fn rmse(samples: &[Sample], coeffs: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    (sse(samples, coeffs) / samples.len() as f64).sqrt()
}
