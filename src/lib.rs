//! `lngamma-fit` library crate.
//!
//! Calibrates the two free coefficients of a closed-form `ln Γ(z)`
//! approximation against a fixed 41-point reference table, using a momentum
//! gradient search over the RMSE.
//!
//! The binary (`lngamma-fit`) is a thin wrapper around this library so that
//! the model, the metric and the driver are testable without spawning
//! processes.

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod optim;
pub mod plot;
pub mod report;
pub mod telemetry;
