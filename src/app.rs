//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - loads the configuration (defaults + environment)
//! - runs the calibration pipeline
//! - prints the text report or the JSON summary

use tracing::info;

use crate::domain::{CalibrationConfig, OutputFormat};
use crate::error::AppError;
use crate::io::{RunSummary, write_summary_json};

pub mod pipeline;

/// Entry point for the `lngamma-fit` binary.
pub fn run() -> Result<(), AppError> {
    crate::telemetry::init_tracing();

    let config = crate::config::from_env()?;
    info!(
        format = ?config.format,
        reference = ?config.reference,
        iterations = config.iterations,
        "configuration loaded"
    );

    match config.format {
        OutputFormat::Text => handle_text(&config),
        OutputFormat::Json => handle_json(&config),
    }
}

fn handle_text(config: &CalibrationConfig) -> Result<(), AppError> {
    let n = crate::data::SAMPLE_COUNT;
    println!("{}", crate::report::format_run_header(config, n));

    let run = pipeline::run_calibration(config, |p| {
        println!("{}", crate::report::format_progress(p));
    })?;

    println!();
    print!(
        "{}",
        crate::report::format_report(config, &run.calibration, &run.residuals, &run.worst)
    );

    if config.plot {
        println!();
        print!(
            "{}",
            crate::plot::render_fit_plot(
                &run.residuals,
                &run.calibration.coefficients,
                config.plot_width,
                config.plot_height,
            )
        );
    }

    println!("done.");
    Ok(())
}

fn handle_json(config: &CalibrationConfig) -> Result<(), AppError> {
    let run = pipeline::run_calibration(config, |_| {})?;
    let summary = RunSummary::new(config, &run.calibration, &run.residuals);
    write_summary_json(std::io::stdout().lock(), &summary)
}
