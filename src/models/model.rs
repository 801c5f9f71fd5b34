//! Closed-form `ln Γ(z)` approximation with two free coefficients.
//!
//! ```text
//! g(z; c0, c1) = (0.5 + z)·ln(1 + z) − (1 + z) + 0.5·ln(2π) − ln(z)
//!              + c0·(1 − tanh(c1·ln z))
//! ```
//!
//! The first four terms are Stirling's series for `ln Γ(1 + z)` shifted back
//! by `ln z`. They are accurate for large `z` but drift as `z → 0`; the tanh
//! term is a smooth step that switches the `c0` offset on for small inputs.

use std::f64::consts::PI;

/// Number of free coefficients.
pub const COEFF_LEN: usize = 2;

/// Stirling-type part of the approximation.
pub fn asymptotic(z: f64) -> f64 {
    (0.5 + z) * z.ln_1p() - (1.0 + z) + 0.5 * (2.0 * PI).ln() - z.ln()
}

/// Small-argument correction `c0·(1 − tanh(c1·ln z))`.
pub fn correction(z: f64, c0: f64, c1: f64) -> f64 {
    c0 * (1.0 - (c1 * z.ln()).tanh())
}

/// Evaluate the approximation at `z`.
///
/// `z` must be strictly positive; the formula takes `ln z` and no validation
/// is performed here (see `data::validate_samples`).
///
/// # Panics
/// Panics if `coeffs` has fewer than `COEFF_LEN` entries.
pub fn predict(z: f64, coeffs: &[f64]) -> f64 {
    asymptotic(z) + correction(z, coeffs[0], coeffs[1])
}
