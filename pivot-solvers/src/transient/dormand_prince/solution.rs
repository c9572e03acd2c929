use pivot_core::ode::State;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Produced every requested sample.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Dormand–Prince integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// One state per requested sample time, in request order.
    ///
    /// Shorter than the request only when the solver was stopped early by
    /// an observer.
    pub samples: Vec<State<N>>,

    /// Work counters for the run.
    pub stats: Stats,
}

/// Work counters reported with a solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of derivative evaluations.
    pub derivative_evals: usize,

    /// Number of accepted steps.
    pub steps_accepted: usize,

    /// Number of rejected (retried) steps.
    pub steps_rejected: usize,
}
