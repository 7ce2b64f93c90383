//! Error types for annealing runs.

use thiserror::Error;

/// Invalid [`SaConfig`](crate::sa::SaConfig) parameters.
///
/// Detected by [`SaConfig::validate`](crate::sa::SaConfig::validate) before
/// the search loop starts, so no callback is ever invoked with a bad config.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The initial temperature is zero, negative, or not finite.
    #[error("initial_temperature must be positive and finite, got {0}")]
    NonPositiveTemperature(f64),

    /// The cooling rate lies outside the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRateOutOfRange(f64),

    /// The iteration budget is zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    /// An explicit report interval of zero was requested.
    #[error("report_interval must be at least 1")]
    ZeroReportInterval,
}

/// Failure of an annealing run.
///
/// `E` is the error type of the user's cost and neighbor functions. Problems
/// that cannot fail use [`std::convert::Infallible`].
///
/// A run that fails returns no partial result.
#[derive(Debug, Error)]
pub enum SaError<E> {
    /// The configuration was rejected before the run started.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Evaluating the cost of the initial state failed.
    #[error("cost evaluation of the initial state failed")]
    InitialState(#[source] E),

    /// The cost or neighbor function failed during an iteration.
    #[error("evaluation failed at iteration {iteration}")]
    Evaluation {
        /// 1-based iteration at which the failure occurred.
        iteration: usize,
        /// Error returned by the user's function.
        #[source]
        source: E,
    },
}

impl<E> SaError<E> {
    /// Returns the configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            SaError::Config(err) => Some(err),
            _ => None,
        }
    }

    /// Consumes the error, returning the user's error if it came from a callback.
    pub fn into_callback_error(self) -> Option<E> {
        match self {
            SaError::Config(_) => None,
            SaError::InitialState(err) | SaError::Evaluation { source: err, .. } => Some(err),
        }
    }
}
