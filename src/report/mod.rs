//! Reporting utilities: per-sample residuals and worst-fit rankings.

pub mod format;

pub use format::*;

use crate::domain::{Sample, SampleResidual};
use crate::models::predict;

/// Evaluate the fitted approximation at every sample.
pub fn compute_residuals(samples: &[Sample], coeffs: &[f64]) -> Vec<SampleResidual> {
    samples
        .iter()
        .map(|s| {
            let approx = predict(s.z, coeffs);
            SampleResidual {
                z: s.z,
                reference: s.lngamma,
                approx,
                residual: approx - s.lngamma,
            }
        })
        .collect()
}

/// The `top_n` samples with the largest absolute residual, worst first.
///
/// Ties keep table order.
pub fn rank_worst(residuals: &[SampleResidual], top_n: usize) -> Vec<SampleResidual> {
    let mut sorted = residuals.to_vec();
    sorted.sort_by(|a, b| {
        b.residual
            .abs()
            .partial_cmp(&a.residual.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_residuals_basic() {
        let samples = [Sample::new(1.0, 0.0), Sample::new(2.0, 0.0)];
        let coeffs = [0.0405, 0.5];
        let residuals = compute_residuals(&samples, &coeffs);
        assert_eq!(residuals.len(), 2);
        assert_eq!(residuals[0].approx, predict(1.0, &coeffs));
        assert!((residuals[0].residual - residuals[0].approx).abs() < 1e-15);
        assert_eq!(residuals[1].z, 2.0);
    }

    #[test]
    fn rank_worst_orders_by_absolute_residual() {
        let row = |z: f64, residual: f64| SampleResidual {
            z,
            reference: 0.0,
            approx: residual,
            residual,
        };
        let residuals = vec![row(1.0, 0.01), row(2.0, -0.5), row(3.0, 0.2), row(4.0, -0.01)];

        let worst = rank_worst(&residuals, 2);
        assert_eq!(worst.len(), 2);
        assert_eq!(worst[0].z, 2.0);
        assert_eq!(worst[1].z, 3.0);

        let all = rank_worst(&residuals, 10);
        assert_eq!(all.len(), 4);
        // Equal magnitudes stay in table order.
        assert_eq!(all[2].z, 1.0);
        assert_eq!(all[3].z, 4.0);
    }
}
