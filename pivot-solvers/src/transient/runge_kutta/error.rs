use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Runge–Kutta 4 integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid sample times: {reason}")]
    InvalidSampleTimes { reason: &'static str },

    #[error("substeps must be at least one")]
    InvalidSubsteps,

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
