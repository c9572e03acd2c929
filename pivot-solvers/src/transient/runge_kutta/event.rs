use pivot_core::ode::State;

/// Event emitted by the Runge–Kutta 4 solver after each substep.
#[derive(Debug, Clone, Copy)]
pub struct Event<const N: usize> {
    /// Count of substeps taken so far (1-based).
    pub step: usize,

    /// State after the substep.
    pub state: State<N>,
}
