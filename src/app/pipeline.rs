//! Shared calibration pipeline used by both output formats.
//!
//! sample table -> validation -> calibration -> residuals -> worst-fit ranking
//!
//! The text and JSON front-ends then only differ in presentation.

use crate::data::{load_samples, validate_samples};
use crate::domain::{CalibrationConfig, Progress, Sample, SampleResidual};
use crate::error::AppError;
use crate::fit::{Calibration, calibrate};
use crate::report::{compute_residuals, rank_worst};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: Vec<Sample>,
    pub calibration: Calibration,
    pub residuals: Vec<SampleResidual>,
    pub worst: Vec<SampleResidual>,
}

/// Execute the full pipeline, forwarding periodic progress to `on_progress`.
pub fn run_calibration<O>(config: &CalibrationConfig, on_progress: O) -> Result<RunOutput, AppError>
where
    O: FnMut(&Progress),
{
    // 1) Build the table and check the approximation's domain once, up front.
    let samples = load_samples(config.reference);
    validate_samples(&samples)?;

    // 2) Fit.
    let calibration = calibrate(&samples, config, on_progress);

    // 3) Compare against the references.
    let residuals = compute_residuals(&samples, &calibration.coefficients);
    let worst = rank_worst(&residuals, config.top_n);

    Ok(RunOutput {
        samples,
        calibration,
        residuals,
        worst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReferenceSource;

    #[test]
    fn default_pipeline_produces_full_comparison() {
        let config = CalibrationConfig::default();
        let mut reports = 0;
        let out = run_calibration(&config, |_| reports += 1).unwrap();

        assert_eq!(reports, 10);
        assert_eq!(out.samples.len(), 41);
        assert_eq!(out.residuals.len(), 41);
        assert_eq!(out.worst.len(), config.top_n);
        assert!(out.worst[0].residual.abs() >= out.worst[1].residual.abs());
        assert!(out.residuals.iter().all(|r| r.residual.abs() < 0.05));
    }

    #[test]
    fn regenerated_references_calibrate_too() {
        let config = CalibrationConfig {
            iterations: 200,
            reference: ReferenceSource::Regenerated,
            ..CalibrationConfig::default()
        };
        let out = run_calibration(&config, |_| {}).unwrap();
        assert!(out.calibration.final_rmse <= out.calibration.initial_rmse);
        assert!(out.residuals.iter().all(|r| r.residual.abs() < 0.05));
    }
}
