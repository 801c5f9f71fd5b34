//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays free of `println!`
//! - output changes are localized

use crate::domain::{CalibrationConfig, Progress, ReferenceSource, SampleResidual};
use crate::fit::Calibration;

/// One progress line, printed every `report_every` iterations.
pub fn format_progress(p: &Progress) -> String {
    format!(
        "  iter {:>5} : rmse = {:12.4e}, v = [{}]",
        p.iteration,
        p.rmse,
        fmt_vec(&p.coefficients)
    )
}

/// Run header: what is being fitted and with which settings.
pub fn format_run_header(config: &CalibrationConfig, n_samples: usize) -> String {
    let mut out = String::new();
    out.push_str("=== lngamma-fit - ln(Gamma) approximation calibration ===\n");
    out.push_str(&format!(
        "Samples: n={} | reference={}\n",
        n_samples,
        match config.reference {
            ReferenceSource::Embedded => "embedded table",
            ReferenceSource::Regenerated => "regenerated (libm lgamma)",
        }
    ));
    out.push_str(&format!(
        "Start: v = [{}] | iterations={} (report every {})\n",
        fmt_vec(&config.initial),
        config.iterations,
        config.report_every
    ));
    out.push_str(&format!(
        "Search: delta={:e} gamma={} alpha={} mu={}\n",
        config.search.delta, config.search.gamma, config.search.alpha, config.search.mu
    ));
    out
}

/// Per-sample `input, reference (approximation)` table.
pub fn format_comparison(residuals: &[SampleResidual]) -> String {
    let mut out = String::new();
    for r in residuals {
        out.push_str(&format!(
            " z = {:12.8}, g = {:12.8} ({:12.8})\n",
            r.z, r.reference, r.approx
        ));
    }
    out
}

/// Final RMSE and fitted coefficients.
pub fn format_result(run: &Calibration) -> String {
    let mut out = String::new();
    out.push_str(&format!("rmse = {:12.4e};\n", run.final_rmse));
    for (i, c) in run.coefficients.iter().enumerate() {
        out.push_str(&format!("v{i} = {c:12.8}\n"));
    }
    out
}

/// Largest absolute residuals.
pub fn format_worst(rows: &[SampleResidual]) -> String {
    let mut out = String::new();
    out.push_str("Worst fits (|approx - reference|):\n");
    out.push_str(
        format!("{:>12} {:>12} {:>12} {:>12}", "z", "reference", "approx", "residual").trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<12} {:-<12} {:-<12}", "", "", "", "").trim_end());
    out.push('\n');
    for r in rows {
        out.push_str(&format!(
            "{:>12.8} {:>12.6} {:>12.6} {:>12.4e}\n",
            r.z, r.reference, r.approx, r.residual
        ));
    }
    out
}

/// Full text report printed after the progress lines.
pub fn format_report(
    config: &CalibrationConfig,
    run: &Calibration,
    residuals: &[SampleResidual],
    worst: &[SampleResidual],
) -> String {
    let mut out = String::new();
    out.push_str(&format_comparison(residuals));
    out.push_str(&format_result(run));
    out.push_str(&format!(
        "initial rmse = {:12.4e}; steps={} rejected={}\n",
        run.initial_rmse, run.steps, run.rejected_steps
    ));
    if config.top_n > 0 && !worst.is_empty() {
        out.push('\n');
        out.push_str(&format_worst(worst));
    }
    out
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:12.8}")).collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(coefficients: Vec<f64>) -> Calibration {
        Calibration {
            initial_rmse: 4.0e-4,
            final_rmse: 3.6e-4,
            coefficients,
            progress: Vec::new(),
            steps: 1000,
            rejected_steps: 3,
        }
    }

    #[test]
    fn comparison_line_layout() {
        let rows = [SampleResidual {
            z: 1.0,
            reference: 0.0,
            approx: 0.25,
            residual: 0.25,
        }];
        assert_eq!(
            format_comparison(&rows),
            " z =   1.00000000, g =   0.00000000 (  0.25000000)\n"
        );
    }

    #[test]
    fn result_lists_rmse_and_coefficients() {
        let txt = format_result(&run_with(vec![0.04, 0.5]));
        assert_eq!(
            txt,
            "rmse =    3.6000e-4;\nv0 =   0.04000000\nv1 =   0.50000000\n"
        );
    }

    #[test]
    fn progress_line_shape() {
        let line = format_progress(&Progress {
            iteration: 100,
            rmse: 3.6e-4,
            coefficients: vec![0.04, 0.5],
        });
        assert_eq!(line, "  iter   100 : rmse =    3.6000e-4, v = [  0.04000000   0.50000000]");
    }

    #[test]
    fn report_includes_worst_table_only_when_requested() {
        let rows = vec![SampleResidual {
            z: 0.5,
            reference: 0.57,
            approx: 0.571,
            residual: 0.001,
        }];
        let mut config = CalibrationConfig::default();
        let run = run_with(vec![0.04, 0.5]);

        let txt = format_report(&config, &run, &rows, &rows);
        assert!(txt.contains("Worst fits"));
        assert!(txt.contains("steps=1000 rejected=3"));

        config.top_n = 0;
        let txt = format_report(&config, &run, &rows, &[]);
        assert!(!txt.contains("Worst fits"));
        assert!(txt.starts_with(" z =   0.50000000"));
    }

    #[test]
    fn header_names_reference_source() {
        let config = CalibrationConfig {
            reference: ReferenceSource::Regenerated,
            ..CalibrationConfig::default()
        };
        let txt = format_run_header(&config, 41);
        assert!(txt.contains("n=41"));
        assert!(txt.contains("libm"));
        assert!(txt.contains("iterations=1000"));
    }
}
