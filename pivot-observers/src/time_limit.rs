use pivot_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops a transient solver once events reach a time bound.
///
/// Works with any solver whose events expose a time and whose actions can
/// stop early. Useful as a safety bound around an integration whose span is
/// otherwise open-ended.
#[derive(Debug, Clone, Copy)]
pub struct TimeLimit {
    t_max: f64,
}

impl TimeLimit {
    /// Creates a time limit at the given simulation time.
    #[must_use]
    pub fn new(t_max: f64) -> Self {
        Self { t_max }
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for TimeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.t_max).then(A::stop_early)
    }
}
