//! Logging setup.
//!
//! Diagnostics go through `tracing` to stderr so stdout carries only the
//! report. The filter comes from `RUST_LOG` and defaults to `info`; use
//! `RUST_LOG=lngamma_fit=debug` for per-report optimizer state or `trace`
//! for every step.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT_GUARD: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once per process.
pub fn init_tracing() {
    INIT_GUARD.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init();
        if let Err(err) = result {
            eprintln!("failed to initialise tracing subscriber: {err}");
        }
    });
}
