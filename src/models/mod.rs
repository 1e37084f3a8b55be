//! Forecasting models.

pub mod arima;

pub use arima::{ARIMASpec, ForecastOutcome, ARIMA};
