//! Classic fixed-step Runge–Kutta 4 solver for ODE models.
//!
//! Each interval between consecutive requested sample times is subdivided
//! into a fixed number of equal substeps. There is no error control; accuracy
//! is governed entirely by the substep count. The method is mainly useful as
//! an independent cross-check of the adaptive solver and for problems where
//! the step size is chosen externally.
//!
//! # Example
//!
//! ```ignore
//! use pivot_solvers::transient::runge_kutta;
//!
//! let solution =
//!     runge_kutta::solve_unobserved(&model, &initial, &sample_times, 100)?;
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use pivot_core::{
    Observer,
    ode::{Integratable, State},
};

use crate::transient::check_sample_times;

/// Integrates an ODE model with fixed Runge–Kutta 4 steps.
///
/// Integration starts at the time carried by the model's initial state and
/// visits each requested sample time in order, taking `substeps` equal steps
/// per inter-sample interval. The final substep of each interval lands
/// exactly on the sample time.
///
/// The observer receives an [`Event`] after every substep and may return
/// [`Action::StopEarly`] to terminate with the samples collected so far.
///
/// # Errors
///
/// Returns an error if the sample sequence is invalid, `substeps` is zero,
/// or the model fails at any evaluation.
pub fn solve<C, Obs, const N: usize>(
    model: &C,
    initial: &C::Input,
    sample_times: &[f64],
    substeps: usize,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    C: Integratable<N>,
    Obs: Observer<Event<N>, Action>,
{
    if substeps == 0 {
        return Err(Error::InvalidSubsteps);
    }

    let State { t: t_start, y: y_start } = C::extract_state(initial);

    check_sample_times(sample_times, t_start)
        .map_err(|reason| Error::InvalidSampleTimes { reason })?;

    let mut samples = Vec::with_capacity(sample_times.len());
    let mut t = t_start;
    let mut y = y_start;
    let mut steps = 0_usize;

    for &target in sample_times {
        // A request starting at the initial time is served by the initial
        // state.
        if target == t_start {
            samples.push(State { t, y });
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let h = (target - t) / substeps as f64;

        for substep in 0..substeps {
            y = rk4_step(model, initial, t, &y, h)?;
            t = if substep == substeps - 1 {
                target
            } else {
                t + h
            };
            steps += 1;

            let event = Event {
                step: steps,
                state: State { t, y },
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    samples,
                    steps,
                });
            }
        }

        samples.push(State { t, y });
    }

    Ok(Solution {
        status: Status::Complete,
        samples,
        steps,
    })
}

/// Integrates an ODE model without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<C, const N: usize>(
    model: &C,
    initial: &C::Input,
    sample_times: &[f64],
    substeps: usize,
) -> Result<Solution<N>, Error>
where
    C: Integratable<N>,
{
    solve(model, initial, sample_times, substeps, ())
}

/// Advances the state by one classic Runge–Kutta 4 step.
fn rk4_step<C, const N: usize>(
    model: &C,
    initial: &C::Input,
    t: f64,
    y: &[f64; N],
    h: f64,
) -> Result<[f64; N], Error>
where
    C: Integratable<N>,
{
    let k1 = derivative(model, initial, t, *y)?;
    let k2 = derivative(model, initial, t + 0.5 * h, offset(y, 0.5 * h, &k1))?;
    let k3 = derivative(model, initial, t + 0.5 * h, offset(y, 0.5 * h, &k2))?;
    let k4 = derivative(model, initial, t + h, offset(y, h, &k3))?;

    let mut next = *y;
    for i in 0..N {
        next[i] += h / 6.0 * (k1[i] + 2.0 * (k2[i] + k3[i]) + k4[i]);
    }
    Ok(next)
}

/// Evaluates the model derivative at a raw solver state.
fn derivative<C, const N: usize>(
    model: &C,
    initial: &C::Input,
    t: f64,
    y: [f64; N],
) -> Result<[f64; N], Error>
where
    C: Integratable<N>,
{
    let input = C::apply_state(initial, State { t, y });
    let output = model.call(&input).map_err(Error::model)?;
    Ok(C::extract_derivative(&output))
}

/// Returns `y + scale * k` componentwise.
fn offset<const N: usize>(y: &[f64; N], scale: f64, k: &[f64; N]) -> [f64; N] {
    let mut out = *y;
    for i in 0..N {
        out[i] += scale * k[i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pivot_core::Model;

    /// Constant-slope model: dy/dt = slope.
    struct Linear {
        slope: f64,
    }

    impl Model for Linear {
        type Input = State<1>;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, _input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(self.slope)
        }
    }

    impl Integratable<1> for Linear {
        fn apply_state(_initial_conditions: &Self::Input, state: State<1>) -> Self::Input {
            state
        }

        fn extract_state(input: &Self::Input) -> State<1> {
            *input
        }

        fn extract_derivative(output: &Self::Output) -> [f64; 1] {
            [*output]
        }
    }

    /// Undamped harmonic oscillator with unit frequency.
    struct Oscillator;

    impl Model for Oscillator {
        type Input = State<2>;
        type Output = [f64; 2];
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            let [position, velocity] = input.y;
            Ok([velocity, -position])
        }
    }

    impl Integratable<2> for Oscillator {
        fn apply_state(_initial_conditions: &Self::Input, state: State<2>) -> Self::Input {
            state
        }

        fn extract_state(input: &Self::Input) -> State<2> {
            *input
        }

        fn extract_derivative(output: &Self::Output) -> [f64; 2] {
            *output
        }
    }

    #[test]
    fn linear_model_is_integrated_exactly() {
        let initial = State { t: 0.0, y: [4.0] };
        let sample_times = [0.0, 0.5, 1.0];

        let solution =
            solve_unobserved(&Linear { slope: 2.0 }, &initial, &sample_times, 4)
                .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 8);

        for (sample, t) in solution.samples.iter().zip(sample_times) {
            assert_eq!(sample.t, t);
            assert_relative_eq!(sample.y[0], 4.0 + 2.0 * t, max_relative = 1e-12);
        }
    }

    #[test]
    fn oscillator_tracks_the_analytical_solution() {
        let initial = State { t: 0.0, y: [1.0, 0.0] };
        let sample_times: Vec<f64> = (1..=20).map(|i| f64::from(i) * 0.5).collect();

        let solution = solve_unobserved(&Oscillator, &initial, &sample_times, 50)
            .expect("should solve");

        for sample in &solution.samples {
            assert_abs_diff_eq!(sample.y[0], sample.t.cos(), epsilon = 1e-5);
            assert_abs_diff_eq!(sample.y[1], -sample.t.sin(), epsilon = 1e-5);
        }
    }

    #[test]
    fn samples_match_the_request_in_count_and_order() {
        let initial = State { t: 0.0, y: [1.0, 0.0] };
        let sample_times = [0.0, 0.2, 0.9, 1.0];

        let solution = solve_unobserved(&Oscillator, &initial, &sample_times, 3)
            .expect("should solve");

        let returned: Vec<f64> = solution.samples.iter().map(|s| s.t).collect();
        assert_eq!(returned, sample_times);
    }

    #[test]
    fn observer_can_stop_between_samples() {
        let initial = State { t: 0.0, y: [1.0, 0.0] };
        let sample_times = [1.0, 2.0];

        let observer =
            |event: &Event<2>| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(&Oscillator, &initial, &sample_times, 10, observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert!(solution.samples.is_empty());
    }

    #[test]
    fn errors_on_zero_substeps() {
        let initial = State { t: 0.0, y: [0.0] };

        let result = solve_unobserved(&Linear { slope: 1.0 }, &initial, &[1.0], 0);

        assert!(matches!(result, Err(Error::InvalidSubsteps)));
    }

    #[test]
    fn errors_on_invalid_sample_times() {
        let initial = State { t: 0.0, y: [0.0] };

        let result = solve_unobserved(&Linear { slope: 1.0 }, &initial, &[2.0, 1.0], 4);

        assert!(matches!(result, Err(Error::InvalidSampleTimes { .. })));
    }

    #[test]
    fn a_single_sample_at_the_initial_time_needs_no_steps() {
        let initial = State { t: 3.0, y: [5.0] };

        let solution = solve_unobserved(&Linear { slope: 1.0 }, &initial, &[3.0], 4)
            .expect("should solve");

        assert_eq!(solution.samples, vec![State { t: 3.0, y: [5.0] }]);
        assert_eq!(solution.steps, 0);
    }
}
