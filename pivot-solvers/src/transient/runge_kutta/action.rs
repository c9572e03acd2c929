/// Control actions supported by the Runge–Kutta 4 solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the samples collected so far.
    StopEarly,
}
