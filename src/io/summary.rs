//! JSON rendering of a calibration run.
//!
//! The summary is the machine-readable form of the text report: the
//! configuration that produced it, the RMSE before and after, the fitted
//! coefficients and every per-sample residual. It is written to stdout only.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::domain::{CalibrationConfig, Progress, SampleResidual};
use crate::error::AppError;
use crate::fit::Calibration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub tool: String,
    pub config: CalibrationConfig,
    pub initial_rmse: f64,
    pub final_rmse: f64,
    pub coefficients: Vec<f64>,
    pub steps: usize,
    pub rejected_steps: usize,
    pub progress: Vec<Progress>,
    pub samples: Vec<SampleResidual>,
}

impl RunSummary {
    pub fn new(config: &CalibrationConfig, run: &Calibration, residuals: &[SampleResidual]) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            config: config.clone(),
            initial_rmse: run.initial_rmse,
            final_rmse: run.final_rmse,
            coefficients: run.coefficients.clone(),
            steps: run.steps,
            rejected_steps: run.rejected_steps,
            progress: run.progress.clone(),
            samples: residuals.to_vec(),
        }
    }
}

/// Pretty-print the summary to `out`, followed by a newline.
pub fn write_summary_json<W: Write>(mut out: W, summary: &RunSummary) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut out, summary)
        .map_err(|e| AppError::output(format!("Failed to write JSON summary: {e}")))?;
    writeln!(out).map_err(|e| AppError::output(format!("Failed to write JSON summary: {e}")))?;
    Ok(())
}
