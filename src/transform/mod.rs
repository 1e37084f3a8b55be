//! Data transformations for time series.
//!
//! # Example
//!
//! ```
//! use arima_gd::transform::standardize;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Standardize to zero mean, unit variance
//! let scaled = standardize(&series);
//! assert_eq!(scaled.inverse().len(), 5);
//! ```

pub mod scale;

pub use scale::{standardize, ScaleResult};
