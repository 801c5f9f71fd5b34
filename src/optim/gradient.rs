//! Momentum gradient search with finite-difference gradients.
//!
//! One step:
//!
//! 1. estimate `∇u(v)` by forward differences with step `delta`
//! 2. normalise it to unit length (a zero gradient is left as is)
//! 3. `dv = gamma·∇u + alpha·dv_prev`
//! 4. try `v ∓ dv`; keep it only if the objective did not get worse,
//!    otherwise drop the momentum and halve `gamma`
//! 5. `gamma *= mu`
//!
//! Normalising makes `gamma` an absolute step length, so the rejection rule
//! is what lets the search settle once steps overshoot the optimum.

use nalgebra::DVector;
use tracing::trace;

use crate::domain::GradientSearchParams;
use crate::optim::{Direction, Minimizer};

/// Step-size factor applied when a candidate step is rejected.
const REJECT_SHRINK: f64 = 0.5;

pub struct GradientSearch<F>
where
    F: Fn(&DVector<f64>) -> f64,
{
    objective: F,
    direction: Direction,
    settings: GradientSearchParams,
    /// Current step length (starts at `settings.gamma`).
    gamma: f64,
    v: DVector<f64>,
    utility: f64,
    gradient: DVector<f64>,
    dv_prev: DVector<f64>,
    steps: usize,
    rejected: usize,
}

impl<F> GradientSearch<F>
where
    F: Fn(&DVector<f64>) -> f64,
{
    pub fn new(
        initial: DVector<f64>,
        settings: GradientSearchParams,
        direction: Direction,
        objective: F,
    ) -> Self {
        let n = initial.len();
        let utility = objective(&initial);
        Self {
            objective,
            direction,
            settings,
            gamma: settings.gamma,
            v: initial,
            utility,
            gradient: DVector::zeros(n),
            dv_prev: DVector::zeros(n),
            steps: 0,
            rejected: 0,
        }
    }

    /// Current step length.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of candidate steps that were rejected.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Last (normalised) gradient estimate.
    pub fn gradient(&self) -> &DVector<f64> {
        &self.gradient
    }

    fn compute_gradient(&mut self) {
        let delta = self.settings.delta;
        let mut probe = self.v.clone();
        for i in 0..self.v.len() {
            probe[i] += delta;
            let u_prime = (self.objective)(&probe);
            probe[i] = self.v[i];
            self.gradient[i] = (u_prime - self.utility) / delta;
        }
    }

    fn normalize_gradient(&mut self) {
        let norm = self.gradient.norm();
        if norm > 0.0 && norm.is_finite() {
            self.gradient /= norm;
        }
    }
}

impl<F> Minimizer for GradientSearch<F>
where
    F: Fn(&DVector<f64>) -> f64,
{
    fn step(&mut self) -> f64 {
        self.compute_gradient();
        self.normalize_gradient();

        let dv = &self.gradient * self.gamma + &self.dv_prev * self.settings.alpha;
        let candidate = match self.direction {
            Direction::Minimize => &self.v - &dv,
            Direction::Maximize => &self.v + &dv,
        };
        let u = (self.objective)(&candidate);

        if self.direction.accepts(u, self.utility) {
            self.v = candidate;
            self.utility = u;
            self.dv_prev = dv;
        } else {
            trace!(step = self.steps, u, current = self.utility, gamma = self.gamma, "step rejected");
            self.dv_prev.fill(0.0);
            self.gamma *= REJECT_SHRINK;
            self.rejected += 1;
        }

        self.gamma *= self.settings.mu;
        self.steps += 1;
        self.utility
    }

    fn params(&self) -> &DVector<f64> {
        &self.v
    }

    fn utility(&self) -> f64 {
        self.utility
    }

    fn summary(&self) -> String {
        let parts: Vec<String> = self.v.iter().map(|x| format!("{x:12.8}")).collect();
        format!(
            "u = {:12.4e}, v = [{}] (gamma={:.3e}, rejected={}/{})",
            self.utility,
            parts.join(" "),
            self.gamma,
            self.rejected,
            self.steps
        )
    }

    fn into_params(self) -> DVector<f64> {
        self.v
    }
}
