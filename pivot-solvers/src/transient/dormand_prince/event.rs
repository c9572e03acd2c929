use pivot_core::ode::State;

/// Event emitted after each accepted integration step.
///
/// Steps are internal to the solver and usually finer than the requested
/// sampling, so observers see the solver's real pace, not just the samples.
#[derive(Debug, Clone, Copy)]
pub struct Event<const N: usize> {
    /// Count of accepted steps so far (1-based).
    pub step: usize,

    /// State after the accepted step.
    pub state: State<N>,

    /// Size of the step that was accepted.
    pub step_size: f64,

    /// Scaled local error norm of the accepted step (at most one).
    pub error_norm: f64,
}
