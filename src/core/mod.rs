//! Core data structures for time series forecasting.

mod forecast;
mod series;

pub use forecast::ForecastResult;
pub use series::Series;
