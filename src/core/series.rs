//! Immutable univariate series of equally spaced observations.

use crate::error::{ForecastError, Result};

/// An ordered, non-empty sequence of observations at equally spaced steps.
///
/// The values are fixed at construction; there are no mutable accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Create a series from its values.
    ///
    /// # Errors
    /// [`ForecastError::EmptyData`] when `values` is empty.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        Ok(Self { values })
    }

    /// Get all values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The last `n` observations (all of them if `n >= len`).
    pub fn tail(&self, n: usize) -> &[f64] {
        &self.values[self.values.len().saturating_sub(n)..]
    }

    /// True when no value is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = ForecastError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Series {
    type Error = ForecastError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}
