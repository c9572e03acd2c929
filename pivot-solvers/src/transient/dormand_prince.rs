//! Adaptive Dormand–Prince 5(4) solver for ODE models.
//!
//! An explicit embedded Runge–Kutta method that computes fifth- and
//! fourth-order solutions from the same stages and uses their difference to
//! estimate the local truncation error. The step size adapts to keep that
//! estimate within the configured `abs_tol` and `rel_tol` bounds, while
//! accepted steps are clamped to land exactly on each requested sample time.
//!
//! # Example
//!
//! ```ignore
//! use pivot_solvers::transient::dormand_prince;
//!
//! let solution = dormand_prince::solve_unobserved(
//!     &model,
//!     &initial,
//!     &sample_times,
//!     &dormand_prince::Config::default(),
//! )?;
//!
//! for sample in &solution.samples {
//!     println!("t={}: {:?}", sample.t, sample.y);
//! }
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;
mod tableau;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use pivot_core::{
    Observer,
    ode::{Integratable, State},
};

use crate::transient::check_sample_times;

/// Step-size controller constants.
///
/// The safety factor keeps the controller a few percent below the step the
/// error estimate would nominally allow; the scale bounds stop a single
/// estimate from moving the step size by more than a factor of five down or
/// up per accepted step.
const SAFETY: f64 = 0.9;
const MIN_SCALE: f64 = 0.2;
const MAX_SCALE: f64 = 5.0;

/// One over the error-estimate order of the embedded pair.
const STEP_EXPONENT: f64 = -1.0 / 5.0;

/// Integrates an ODE model with adaptive Dormand–Prince 5(4) steps.
///
/// Integration starts at the time carried by the model's initial state and
/// runs to the last requested sample time. The returned solution holds one
/// state per requested time, in request order.
///
/// # Algorithm
///
/// 1. Validate the config and the requested sample times.
/// 2. For each attempted step:
///    - Clamp the proposed step so it never passes the next sample time.
///    - Evaluate the seven Dormand–Prince stages and both embedded
///      solutions.
///    - Accept the step if the scaled error norm is at most one, recording a
///      sample whenever the step lands on a requested time; otherwise retry
///      with a smaller step.
///    - Rescale the step from the error estimate either way.
///    - After an accepted step, emit an [`Event`]; if the observer returns
///      [`Action::StopEarly`], terminate with the samples collected so far.
/// 3. Fail with the partial samples if the step budget runs out or the
///    controller needs a step below `min_step`.
///
/// # Errors
///
/// Returns an error for an invalid config or sample sequence, if the model
/// fails at any evaluation, or if the tolerance cannot be met within the
/// step budget and minimum step size. See [`Error`].
pub fn solve<C, Obs, const N: usize>(
    model: &C,
    initial: &C::Input,
    sample_times: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error<N>>
where
    C: Integratable<N>,
    Obs: Observer<Event<N>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let State { t: t_start, y: y_start } = C::extract_state(initial);

    check_sample_times(sample_times, t_start)
        .map_err(|reason| Error::InvalidSampleTimes { reason })?;
    let t_end = sample_times[sample_times.len() - 1];

    let mut samples = Vec::with_capacity(sample_times.len());
    let mut stats = Stats::default();

    let mut t = t_start;
    let mut y = y_start;
    let mut target_idx = 0;

    // A request starting at the initial time is served by the initial state.
    if sample_times[0] == t_start {
        samples.push(State { t, y });
        target_idx = 1;
    }

    let span = t_end - t_start;
    let mut h = config.initial_step.unwrap_or(span / 100.0).min(span);

    while target_idx < sample_times.len() {
        let target = sample_times[target_idx];
        let remaining = target - t;

        // Never pass the next requested sample; a hop onto it may be
        // arbitrarily small, but a controller-chosen step may not.
        let landing = h >= remaining;
        let h_attempt = if landing { remaining } else { h };
        if !landing && h_attempt < config.min_step {
            return Err(Error::StepSizeUnderflow {
                t_reached: t,
                min_step: config.min_step,
                partial: samples,
            });
        }

        if stats.steps_accepted + stats.steps_rejected >= config.max_steps {
            return Err(Error::StepLimitExceeded {
                t_reached: t,
                max_steps: config.max_steps,
                partial: samples,
            });
        }

        let (y_next, error_norm) = attempt_step(model, initial, t, &y, h_attempt, config)?;
        stats.derivative_evals += tableau::STAGES;

        if error_norm <= 1.0 {
            stats.steps_accepted += 1;
            t = if landing { target } else { t + h_attempt };
            y = y_next;

            if landing {
                samples.push(State { t, y });
                target_idx += 1;
            }

            h = next_step_size(h_attempt, error_norm);

            let event = Event {
                step: stats.steps_accepted,
                state: State { t, y },
                step_size: h_attempt,
                error_norm,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    samples,
                    stats,
                });
            }
        } else {
            stats.steps_rejected += 1;
            h = next_step_size(h_attempt, error_norm);
        }
    }

    Ok(Solution {
        status: Status::Complete,
        samples,
        stats,
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
    config: &Config,
) -> Result<Solution<N>, Error<N>>
where
    C: Integratable<N>,
{
    solve(model, initial, sample_times, config, ())
}

/// Evaluates one embedded step and its scaled error norm.
fn attempt_step<C, const N: usize>(
    model: &C,
    initial: &C::Input,
    t: f64,
    y: &[f64; N],
    h: f64,
    config: &Config,
) -> Result<([f64; N], f64), Error<N>>
where
    C: Integratable<N>,
{
    let mut stages = [[0.0; N]; tableau::STAGES];
    stages[0] = derivative(model, initial, t, *y)?;

    for stage in 1..tableau::STAGES {
        let y_stage = weighted_step(y, h, &stages[..stage], &tableau::A[stage][..stage]);
        stages[stage] = derivative(model, initial, t + tableau::C[stage] * h, y_stage)?;
    }

    let y_fifth = weighted_step(y, h, &stages, &tableau::B);
    let y_fourth = weighted_step(y, h, &stages, &tableau::B_HAT);

    // Scaled RMS over per-component tolerances: a norm of one means the
    // estimated local error sits exactly on the tolerance.
    let mut sum = 0.0;
    for i in 0..N {
        let scale = config.abs_tol + config.rel_tol * y_fifth[i].abs().max(y_fourth[i].abs());
        let delta = (y_fifth[i] - y_fourth[i]) / scale;
        sum += delta * delta;
    }
    #[allow(clippy::cast_precision_loss)]
    let error_norm = (sum / N as f64).sqrt();

    Ok((y_fifth, error_norm))
}

/// Evaluates the model derivative at a raw solver state.
fn derivative<C, const N: usize>(
    model: &C,
    initial: &C::Input,
    t: f64,
    y: [f64; N],
) -> Result<[f64; N], Error<N>>
where
    C: Integratable<N>,
{
    let input = C::apply_state(initial, State { t, y });
    let output = model.call(&input).map_err(Error::model)?;
    Ok(C::extract_derivative(&output))
}

/// Returns `y + h * Σ coeffs[j] * derivatives[j]` componentwise.
fn weighted_step<const N: usize>(
    y: &[f64; N],
    h: f64,
    derivatives: &[[f64; N]],
    coeffs: &[f64],
) -> [f64; N] {
    let mut next = *y;
    for (i, value) in next.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (derivative, coeff) in derivatives.iter().zip(coeffs) {
            acc += coeff * derivative[i];
        }
        *value += h * acc;
    }
    next
}

/// Rescales the step size from the error estimate of the last attempt.
///
/// A non-finite norm (from overflow or NaN in the state) is treated as a
/// maximally failed step so the controller backs off instead of stalling.
fn next_step_size(h: f64, error_norm: f64) -> f64 {
    let factor = if !error_norm.is_finite() {
        MIN_SCALE
    } else if error_norm == 0.0 {
        MAX_SCALE
    } else {
        (SAFETY * error_norm.powf(STEP_EXPONENT)).clamp(MIN_SCALE, MAX_SCALE)
    };

    h * factor
}
