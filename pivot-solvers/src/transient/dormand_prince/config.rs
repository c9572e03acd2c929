/// Configuration for the Dormand–Prince solver.
///
/// A step is accepted when the scaled local error norm is at most one, where
/// each state component is scaled by `abs_tol + rel_tol * |y|`. The defaults
/// (`rel_tol = 1e-6`, `abs_tol = 1e-9`) are deliberately tighter than the
/// common 1e-3/1e-6 defaults of general-purpose solvers.
///
/// For chaotic systems, nearby tolerances still produce visibly different
/// trajectories once local errors have been stretched by the dynamics; that
/// divergence is a property of the system, not a solver defect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Relative local error tolerance.
    pub rel_tol: f64,

    /// Absolute local error tolerance.
    pub abs_tol: f64,

    /// First attempted step size.
    ///
    /// When `None`, the solver starts with one hundredth of the span from
    /// the initial time to the last sample time.
    pub initial_step: Option<f64>,

    /// Smallest step size the controller may request.
    ///
    /// Shrinking below this bound means the tolerance is not achievable and
    /// integration fails. Final hops onto a sample time may be smaller.
    pub min_step: f64,

    /// Budget of attempted steps (accepted plus rejected).
    pub max_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            abs_tol: 1e-9,
            initial_step: None,
            min_step: 1e-12,
            max_steps: 100_000,
        }
    }
}

impl Config {
    /// Validates tolerances, step bounds, and the step budget.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance or step bound is non-finite or
    /// non-positive, or if the step budget is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.rel_tol.is_finite() || self.rel_tol <= 0.0 {
            return Err("rel_tol must be finite and positive");
        }
        if !self.abs_tol.is_finite() || self.abs_tol <= 0.0 {
            return Err("abs_tol must be finite and positive");
        }
        if let Some(step) = self.initial_step {
            if !step.is_finite() || step <= 0.0 {
                return Err("initial_step must be finite and positive");
            }
        }
        if !self.min_step.is_finite() || self.min_step <= 0.0 {
            return Err("min_step must be finite and positive");
        }
        if self.max_steps == 0 {
            return Err("max_steps must be at least one");
        }
        Ok(())
    }
}
