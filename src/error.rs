//! Error types for the arima-gd library.

use thiserror::Error;

/// Result type alias for forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while differencing, training or forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Differencing order cannot be applied to a series of this length.
    #[error("invalid differencing order {order} for series of length {len}")]
    InvalidOrder { order: usize, len: usize },

    /// AR lookback reaches past the start of the available history.
    #[error("insufficient history: {lags} lags requested, {available} values available")]
    InsufficientHistory { lags: usize, available: usize },

    /// Training produced a non-finite intermediate value.
    #[error("numerical divergence at epoch {epoch}, step {step}")]
    NumericalDivergence { epoch: usize, step: usize },
}
