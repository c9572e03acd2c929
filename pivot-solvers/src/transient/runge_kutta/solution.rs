use pivot_core::ode::State;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Produced every requested sample.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Runge–Kutta 4 integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// One state per requested sample time, in request order.
    ///
    /// Shorter than the request only when the solver was stopped early by
    /// an observer.
    pub samples: Vec<State<N>>,

    /// Total number of substeps taken.
    pub steps: usize,
}
