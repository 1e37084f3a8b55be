//! # arima-gd
//!
//! ARIMA(p, d, q) forecasting fitted from scratch by online gradient descent.
//!
//! Provides differencing and its inverse, AR/MA point predictors, a
//! bounded-update trainer, walk-forward forecasting over a held-out split,
//! and MSE/MAE evaluation on the original scale.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::too_many_arguments)]

pub mod core;
pub mod error;
pub mod models;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ForecastResult, Series};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::arima::{TrainerConfig, DEFAULT_SEED};
    pub use crate::models::{ARIMASpec, ForecastOutcome, ARIMA};
    pub use crate::transform::{standardize, ScaleResult};
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
