//! Run configuration from the environment.
//!
//! The calibration constants are compiled in (`CalibrationConfig::default()`).
//! Any of them can be overridden with `LNGAMMA_*` variables, either exported
//! in the shell or placed in a `.env` file next to the binary's working
//! directory.
//!
//! Parsing goes through a lookup closure so it can be tested without touching
//! the process environment.

use std::str::FromStr;

use crate::domain::{CalibrationConfig, OutputFormat, ReferenceSource};
use crate::error::AppError;

pub const ENV_ITERATIONS: &str = "LNGAMMA_ITERATIONS";
pub const ENV_REPORT_EVERY: &str = "LNGAMMA_REPORT_EVERY";
pub const ENV_C0: &str = "LNGAMMA_C0";
pub const ENV_C1: &str = "LNGAMMA_C1";
pub const ENV_DELTA: &str = "LNGAMMA_DELTA";
pub const ENV_GAMMA: &str = "LNGAMMA_GAMMA";
pub const ENV_ALPHA: &str = "LNGAMMA_ALPHA";
pub const ENV_MU: &str = "LNGAMMA_MU";
pub const ENV_REFERENCE: &str = "LNGAMMA_REFERENCE";
pub const ENV_FORMAT: &str = "LNGAMMA_FORMAT";
pub const ENV_PLOT: &str = "LNGAMMA_PLOT";
pub const ENV_PLOT_WIDTH: &str = "LNGAMMA_PLOT_WIDTH";
pub const ENV_PLOT_HEIGHT: &str = "LNGAMMA_PLOT_HEIGHT";
pub const ENV_TOP: &str = "LNGAMMA_TOP";

/// Load `.env` (if any) and build the configuration from the process environment.
pub fn from_env() -> Result<CalibrationConfig, AppError> {
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the configuration from an arbitrary key lookup.
pub fn from_lookup<L>(lookup: L) -> Result<CalibrationConfig, AppError>
where
    L: Fn(&str) -> Option<String>,
{
    let defaults = CalibrationConfig::default();
    let mut config = defaults.clone();

    config.iterations = parse_or(&lookup, ENV_ITERATIONS, defaults.iterations)?;
    config.report_every = parse_or(&lookup, ENV_REPORT_EVERY, defaults.report_every)?;
    config.initial = [
        parse_or(&lookup, ENV_C0, defaults.initial[0])?,
        parse_or(&lookup, ENV_C1, defaults.initial[1])?,
    ];
    config.search.delta = parse_or(&lookup, ENV_DELTA, defaults.search.delta)?;
    config.search.gamma = parse_or(&lookup, ENV_GAMMA, defaults.search.gamma)?;
    config.search.alpha = parse_or(&lookup, ENV_ALPHA, defaults.search.alpha)?;
    config.search.mu = parse_or(&lookup, ENV_MU, defaults.search.mu)?;

    if let Some(raw) = lookup(ENV_REFERENCE) {
        config.reference = ReferenceSource::parse(&raw).ok_or_else(|| {
            AppError::config(format!(
                "Invalid {ENV_REFERENCE}='{raw}' (expected 'embedded' or 'regenerated')."
            ))
        })?;
    }
    if let Some(raw) = lookup(ENV_FORMAT) {
        config.format = OutputFormat::parse(&raw).ok_or_else(|| {
            AppError::config(format!("Invalid {ENV_FORMAT}='{raw}' (expected 'text' or 'json')."))
        })?;
    }
    if let Some(raw) = lookup(ENV_PLOT) {
        config.plot = parse_flag(&raw)
            .ok_or_else(|| AppError::config(format!("Invalid {ENV_PLOT}='{raw}' (expected a boolean).")))?;
    }
    config.plot_width = parse_or(&lookup, ENV_PLOT_WIDTH, defaults.plot_width)?;
    config.plot_height = parse_or(&lookup, ENV_PLOT_HEIGHT, defaults.plot_height)?;
    config.top_n = parse_or(&lookup, ENV_TOP, defaults.top_n)?;

    validate(&config)?;
    Ok(config)
}

/// Reject settings the calibration cannot run with.
pub fn validate(config: &CalibrationConfig) -> Result<(), AppError> {
    if config.iterations == 0 {
        return Err(AppError::config("Iteration count must be >= 1."));
    }
    if config.report_every == 0 {
        return Err(AppError::config("Report interval must be >= 1."));
    }
    if !config.initial.iter().all(|c| c.is_finite()) {
        return Err(AppError::config(format!(
            "Initial coefficients must be finite, got {:?}.",
            config.initial
        )));
    }

    let s = &config.search;
    if !(s.delta.is_finite() && s.delta > 0.0) {
        return Err(AppError::config(format!("delta must be finite and > 0, got {}.", s.delta)));
    }
    if !(s.gamma.is_finite() && s.gamma > 0.0) {
        return Err(AppError::config(format!("gamma must be finite and > 0, got {}.", s.gamma)));
    }
    if !(s.alpha.is_finite() && (0.0..1.0).contains(&s.alpha)) {
        return Err(AppError::config(format!("alpha must be in [0, 1), got {}.", s.alpha)));
    }
    if !(s.mu.is_finite() && s.mu > 0.0 && s.mu <= 1.0) {
        return Err(AppError::config(format!("mu must be in (0, 1], got {}.", s.mu)));
    }
    Ok(())
}

fn parse_or<L, T>(lookup: &L, key: &str, default: T) -> Result<T, AppError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("Invalid {key}='{raw}': {e}"))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_compiled_defaults() {
        let config = from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CalibrationConfig::default());
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.initial, [0.0405, 0.5]);
        assert_eq!(config.search.gamma, 0.002);
        assert_eq!(config.search.mu, 0.999);
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_lookup(lookup_from(&[
            (ENV_ITERATIONS, "250"),
            (ENV_C0, " 0.03 "),
            (ENV_ALPHA, "0"),
            (ENV_REFERENCE, "regenerated"),
            (ENV_FORMAT, "JSON"),
            (ENV_PLOT, "off"),
            (ENV_TOP, "0"),
        ]))
        .unwrap();
        assert_eq!(config.iterations, 250);
        assert_eq!(config.initial, [0.03, 0.5]);
        assert_eq!(config.search.alpha, 0.0);
        assert_eq!(config.reference, ReferenceSource::Regenerated);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.plot);
        assert_eq!(config.top_n, 0);
    }

    #[test]
    fn malformed_values_are_config_errors() {
        for pairs in [
            [(ENV_ITERATIONS, "many")],
            [(ENV_ITERATIONS, "0")],
            [(ENV_REPORT_EVERY, "0")],
            [(ENV_DELTA, "-1e-6")],
            [(ENV_GAMMA, "NaN")],
            [(ENV_ALPHA, "1.0")],
            [(ENV_MU, "1.5")],
            [(ENV_C1, "inf")],
            [(ENV_REFERENCE, "table")],
            [(ENV_FORMAT, "xml")],
            [(ENV_PLOT, "maybe")],
        ] {
            let err = from_lookup(lookup_from(&pairs)).unwrap_err();
            assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG, "{pairs:?}");
        }
    }

    #[test]
    fn unit_mu_is_accepted() {
        let config = from_lookup(lookup_from(&[(ENV_MU, "1")])).unwrap();
        assert_eq!(config.search.mu, 1.0);
    }
}
