//! Minimizer capability used by the calibration driver.
//!
//! The driver only needs four things from an optimizer: build it around an
//! objective and a starting vector, advance it one step, look at its state,
//! and take the final vector back. `Minimizer` is that seam;
//! `GradientSearch` is the implementation the calibration runs on.

use nalgebra::DVector;

pub mod gradient;

pub use gradient::GradientSearch;

/// Whether the objective is driven down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// True when `candidate` is at least as good as `current`.
    ///
    /// NaN never counts as an improvement.
    pub fn accepts(self, candidate: f64, current: f64) -> bool {
        match self {
            Direction::Minimize => candidate <= current,
            Direction::Maximize => candidate >= current,
        }
    }
}

/// A stateful iterative optimizer over a parameter vector.
pub trait Minimizer {
    /// Advance one iteration and return the objective at the current parameters.
    fn step(&mut self) -> f64;

    /// Current parameter vector.
    fn params(&self) -> &DVector<f64>;

    /// Objective value at `params()`.
    fn utility(&self) -> f64;

    /// One-line diagnostic of the optimizer state.
    fn summary(&self) -> String;

    /// Release the optimizer, keeping only the parameters.
    fn into_params(self) -> DVector<f64>
    where
        Self: Sized;
}
