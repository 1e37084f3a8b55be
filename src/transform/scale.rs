//! Z-score scaling for time series.

/// Result of a scaling transform, containing parameters for inverse transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleResult {
    /// Transformed data
    pub data: Vec<f64>,
    /// Mean of the input
    pub center: f64,
    /// Population standard deviation of the input (1.0 for constant input)
    pub scale: f64,
}

impl ScaleResult {
    /// Inverse transform to recover original scale.
    pub fn inverse(&self) -> Vec<f64> {
        self.inverse_values(&self.data)
    }

    /// Map values on the scaled axis (e.g. forecasts) back to the original scale.
    pub fn inverse_values(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&x| x * self.scale + self.center).collect()
    }

    /// Transform new data using the same parameters.
    pub fn transform(&self, data: &[f64]) -> Vec<f64> {
        data.iter()
            .map(|&x| (x - self.center) / self.scale)
            .collect()
    }
}

/// Standardize data to zero mean and unit variance (z-score normalization).
///
/// x_scaled = (x - mean) / std
///
/// `std` is the population standard deviation (divides by n).
pub fn standardize(series: &[f64]) -> ScaleResult {
    if series.is_empty() {
        return ScaleResult {
            data: Vec::new(),
            center: 0.0,
            scale: 1.0,
        };
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    let scale = if std < 1e-10 { 1.0 } else { std };
    let data = series.iter().map(|&x| (x - mean) / scale).collect();

    ScaleResult {
        data,
        center: mean,
        scale,
    }
}
