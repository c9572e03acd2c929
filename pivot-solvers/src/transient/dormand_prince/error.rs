use std::error::Error as StdError;

use pivot_core::ode::State;
use thiserror::Error;

/// Errors that can occur during Dormand–Prince integration.
///
/// The non-convergence variants carry every sample produced before the
/// failure, so callers can inspect how far the integration got; a partial
/// trajectory is never returned as if it were complete.
#[derive(Debug, Error)]
pub enum Error<const N: usize> {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("invalid sample times: {reason}")]
    InvalidSampleTimes { reason: &'static str },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("step budget of {max_steps} exhausted at t = {t_reached}")]
    StepLimitExceeded {
        t_reached: f64,
        max_steps: usize,
        /// Samples produced before the budget ran out.
        partial: Vec<State<N>>,
    },

    #[error(
        "local error tolerance not achievable at t = {t_reached}: \
         controller requested a step below the minimum of {min_step}"
    )]
    StepSizeUnderflow {
        t_reached: f64,
        min_step: f64,
        /// Samples produced before the step size collapsed.
        partial: Vec<State<N>>,
    },
}

impl<const N: usize> Error<N> {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
