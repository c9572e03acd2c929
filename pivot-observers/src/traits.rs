//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across the transient solvers.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the simulation time
//! - [`HasStepSize`] — events that carry the accepted step size
//! - [`HasErrorNorm`] — events that carry a scaled local error norm
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pivot_core::Observer;
//! use pivot_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops a solver after a fixed number of events past a time bound.
//! struct Patience {
//!     t_max: f64,
//!     grace: usize,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Patience {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.time() < self.t_max {
//!             return None;
//!         }
//!         if self.grace > 0 {
//!             self.grace -= 1;
//!             return None;
//!         }
//!         Some(A::stop_early())
//!     }
//! }
//! ```

use pivot_solvers::transient::{dormand_prince, runge_kutta};

/// An event that carries the simulation time.
pub trait HasTime {
    /// Returns the simulation time for this event.
    fn time(&self) -> f64;
}

/// An event that carries the size of the step it reports.
pub trait HasStepSize {
    /// Returns the step size for this event.
    fn step_size(&self) -> f64;
}

/// An event that carries a scaled local error norm.
pub trait HasErrorNorm {
    /// Returns the error norm for this event.
    fn error_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- Event impls ---

impl<const N: usize> HasTime for dormand_prince::Event<N> {
    fn time(&self) -> f64 {
        self.state.t
    }
}

impl<const N: usize> HasTime for runge_kutta::Event<N> {
    fn time(&self) -> f64 {
        self.state.t
    }
}

impl<const N: usize> HasStepSize for dormand_prince::Event<N> {
    fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl<const N: usize> HasErrorNorm for dormand_prince::Event<N> {
    fn error_norm(&self) -> f64 {
        self.error_norm
    }
}

// --- Action impls ---

impl CanStopEarly for dormand_prince::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for runge_kutta::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
