//! State-vector representation shared by the ODE solvers.

use crate::Model;

/// The state of an ODE system at a single instant.
///
/// `N` is the number of dependent variables. The meaning and order of the
/// entries in `y` are fixed by the [`Integratable`] implementation that
/// produces and consumes them; solvers treat the vector as opaque numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const N: usize> {
    /// Simulation time.
    pub t: f64,

    /// The dependent variables at time `t`.
    ///
    /// The order of values must match the derivative array returned by
    /// [`Integratable::extract_derivative`].
    pub y: [f64; N],
}

/// A trait for models that represent systems of ordinary differential
/// equations with `N` state variables.
///
/// Implementing this trait lets a [`Model`] be integrated by the transient
/// solvers, which work on the raw [`State<N>`] representation and call back
/// into the model through these conversions. All values in `y` are plain SI
/// magnitudes; models with dimensioned inputs convert at this boundary.
pub trait Integratable<const N: usize>: Model {
    /// Constructs the model input by applying the given solver state to the
    /// provided initial conditions.
    ///
    /// Called for every derivative evaluation, including the internal stages
    /// of a single solver step.
    fn apply_state(initial_conditions: &Self::Input, state: State<N>) -> Self::Input;

    /// Extracts the solver state from the model input.
    ///
    /// Called once at the start of integration to determine the initial time
    /// and state values.
    fn extract_state(input: &Self::Input) -> State<N>;

    /// Extracts the state derivatives from the model output.
    ///
    /// The returned array must align with the order of `y` in [`State`].
    fn extract_derivative(output: &Self::Output) -> [f64; N];
}
