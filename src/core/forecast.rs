//! Walk-forward forecast results on the original scale.

use crate::utils::AccuracyMetrics;

/// A completed walk-forward forecast with its accuracy against held-out data.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Forecasts reconstructed to the original scale.
    values: Vec<f64>,
    /// Held-out observations the forecasts are scored against.
    actual: Vec<f64>,
    /// Forecasts on the differenced scale.
    differenced: Vec<f64>,
    /// One-step residuals on the differenced scale.
    residuals: Vec<f64>,
    /// Fitted AR coefficients.
    ar_coefficients: Vec<f64>,
    /// Fitted MA coefficients.
    ma_coefficients: Vec<f64>,
    metrics: AccuracyMetrics,
}

impl ForecastResult {
    pub(crate) fn new(
        values: Vec<f64>,
        actual: Vec<f64>,
        differenced: Vec<f64>,
        residuals: Vec<f64>,
        ar_coefficients: Vec<f64>,
        ma_coefficients: Vec<f64>,
        metrics: AccuracyMetrics,
    ) -> Self {
        Self {
            values,
            actual,
            differenced,
            residuals,
            ar_coefficients,
            ma_coefficients,
            metrics,
        }
    }

    /// Get the forecasts on the original scale.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the held-out actual values.
    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    /// Get the forecasts on the differenced scale.
    pub fn differenced(&self) -> &[f64] {
        &self.differenced
    }

    /// Get the held-out residuals on the differenced scale.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Get AR coefficients.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coefficients
    }

    /// Get MA coefficients.
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coefficients
    }

    pub fn metrics(&self) -> &AccuracyMetrics {
        &self.metrics
    }

    pub fn mse(&self) -> f64 {
        self.metrics.mse
    }

    pub fn mae(&self) -> f64 {
        self.metrics.mae
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// True when every forecast is finite, i.e. safe to plot.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Consume the result, returning the original-scale forecasts.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
