//! Calibration driver.
//!
//! Runs the gradient search for a fixed number of iterations over the RMSE
//! objective. There is no convergence test: the loop always runs
//! `config.iterations` steps, and every `config.report_every`-th step a
//! `Progress` snapshot goes to the caller's observer.

use nalgebra::DVector;
use tracing::{debug, info, trace};

use crate::domain::{CalibrationConfig, Progress, Sample};
use crate::math::rmse;
use crate::optim::{Direction, GradientSearch, Minimizer};

/// Outcome of one calibration run.
#[derive(Debug, Clone)]
pub struct Calibration {
    /// RMSE at the starting coefficients.
    pub initial_rmse: f64,
    /// RMSE at the fitted coefficients, evaluated after the last step.
    pub final_rmse: f64,
    pub coefficients: Vec<f64>,
    pub progress: Vec<Progress>,
    pub steps: usize,
    pub rejected_steps: usize,
}

/// Fit the approximation's coefficients to `samples`.
///
/// `samples` must already satisfy `data::validate_samples`.
pub fn calibrate<O>(samples: &[Sample], config: &CalibrationConfig, mut on_progress: O) -> Calibration
where
    O: FnMut(&Progress),
{
    let objective = move |v: &DVector<f64>| rmse(samples, v.as_slice());
    let mut search = GradientSearch::new(
        DVector::from_row_slice(&config.initial),
        config.search,
        Direction::Minimize,
        objective,
    );

    let initial_rmse = search.utility();
    let report_every = config.report_every.max(1);
    let mut progress = Vec::with_capacity(config.iterations / report_every);

    info!(
        iterations = config.iterations,
        n = samples.len(),
        initial_rmse,
        "calibration started"
    );

    for i in 0..config.iterations {
        let before = rmse(samples, search.params().as_slice());
        let after = search.step();
        trace!(iteration = i + 1, before, after, "step");

        if (i + 1) % report_every == 0 {
            debug!("{}", search.summary());
            let snapshot = Progress {
                iteration: i + 1,
                rmse: after,
                coefficients: search.params().iter().copied().collect(),
            };
            on_progress(&snapshot);
            progress.push(snapshot);
        }
    }

    let steps = search.steps();
    let rejected_steps = search.rejected();
    let coefficients = search.into_params();
    let final_rmse = rmse(samples, coefficients.as_slice());

    info!(final_rmse, rejected_steps, "calibration finished");

    Calibration {
        initial_rmse,
        final_rmse,
        coefficients: coefficients.iter().copied().collect(),
        progress,
        steps,
        rejected_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLES;
    use crate::models::predict;

    #[test]
    fn default_run_fits_every_sample() {
        let config = CalibrationConfig::default();
        let mut seen = Vec::new();
        let run = calibrate(&SAMPLES, &config, |p| seen.push(p.iteration));

        assert_eq!(run.steps, 1000);
        assert_eq!(seen, vec![100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]);
        assert_eq!(run.progress.len(), 10);

        for s in &SAMPLES {
            let g = predict(s.z, &run.coefficients);
            assert!((g - s.lngamma).abs() < 0.05, "z={}: {g} vs {}", s.z, s.lngamma);
        }
    }

    #[test]
    fn default_run_reduces_rmse() {
        let run = calibrate(&SAMPLES, &CalibrationConfig::default(), |_| {});
        assert!(
            run.final_rmse < 0.9 * run.initial_rmse,
            "initial={} final={}",
            run.initial_rmse,
            run.final_rmse
        );
        for w in run.progress.windows(2) {
            assert!(w[1].rmse <= w[0].rmse);
        }
        let last = run.progress.last().unwrap();
        assert_eq!(last.rmse.to_bits(), run.final_rmse.to_bits());
        assert_eq!(last.coefficients, run.coefficients);
    }

    #[test]
    fn zero_iterations_returns_the_starting_point() {
        let config = CalibrationConfig {
            iterations: 0,
            ..CalibrationConfig::default()
        };
        let run = calibrate(&SAMPLES, &config, |_| panic!("no progress expected"));
        assert_eq!(run.coefficients, vec![0.0405, 0.5]);
        assert_eq!(run.initial_rmse, run.final_rmse);
        assert!(run.progress.is_empty());
    }

    #[test]
    fn reports_only_on_full_periods() {
        let config = CalibrationConfig {
            iterations: 250,
            report_every: 100,
            ..CalibrationConfig::default()
        };
        let run = calibrate(&SAMPLES, &config, |_| {});
        let iters: Vec<usize> = run.progress.iter().map(|p| p.iteration).collect();
        assert_eq!(iters, vec![100, 200]);
        assert_eq!(run.steps, 250);
    }
}
