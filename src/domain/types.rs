//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during calibration
//! - rendered as text or JSON at the end of a run

use serde::{Deserialize, Serialize};

/// One reference point: an input `z > 0` and the tabulated `ln Γ(z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub z: f64,
    pub lngamma: f64,
}

impl Sample {
    pub const fn new(z: f64, lngamma: f64) -> Self {
        Self { z, lngamma }
    }
}

/// Where the reference column of the sample table comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSource {
    /// The literal 41-row table shipped with the crate.
    Embedded,
    /// The same log grid, with references recomputed by `libm::lgamma`.
    Regenerated,
}

impl ReferenceSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "embedded" => Some(Self::Embedded),
            "regenerated" | "libm" => Some(Self::Regenerated),
            _ => None,
        }
    }
}

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Hyperparameters of the momentum gradient search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSearchParams {
    /// Finite-difference step used to approximate the gradient.
    pub delta: f64,
    /// Initial step size along the normalised gradient.
    pub gamma: f64,
    /// Momentum: fraction of the previous step carried into the next one.
    pub alpha: f64,
    /// Per-step multiplicative decay of `gamma` (best slightly below 1).
    pub mu: f64,
}

impl Default for GradientSearchParams {
    fn default() -> Self {
        Self {
            delta: 1e-6,
            gamma: 0.002,
            alpha: 0.1,
            mu: 0.999,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// `Default` holds the compiled-in calibration constants; `config::from_env`
/// layers environment overrides on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    pub iterations: usize,
    pub report_every: usize,
    /// Initial `(c0, c1)`.
    pub initial: [f64; 2],
    pub search: GradientSearchParams,
    pub reference: ReferenceSource,
    pub format: OutputFormat,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Number of worst-fit samples listed in the text report.
    pub top_n: usize,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            report_every: 100,
            initial: [0.0405, 0.5],
            search: GradientSearchParams::default(),
            reference: ReferenceSource::Embedded,
            format: OutputFormat::Text,
            plot: true,
            plot_width: 72,
            plot_height: 20,
            top_n: 5,
        }
    }
}

/// Periodic snapshot emitted by the calibration driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based iteration count.
    pub iteration: usize,
    pub rmse: f64,
    pub coefficients: Vec<f64>,
}

/// Per-sample comparison after fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleResidual {
    pub z: f64,
    pub reference: f64,
    pub approx: f64,
    /// `approx - reference`.
    pub residual: f64,
}
