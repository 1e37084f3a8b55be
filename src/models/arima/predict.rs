//! Point predictions for the AR and MA components.

use crate::error::{ForecastError, Result};

/// Default bound applied to residuals before they feed the MA term or an update.
pub const RESIDUAL_BOUND: f64 = 100.0;

/// Check that a clamp bound is finite and positive.
pub(crate) fn check_bound(name: &str, bound: f64) -> Result<()> {
    if bound.is_finite() && bound > 0.0 {
        Ok(())
    } else {
        Err(ForecastError::InvalidParameter(format!(
            "{} must be finite and positive, got {}",
            name, bound
        )))
    }
}

/// Autoregressive prediction from the most recent `lags` values.
///
/// Computes `Σ coeffs[i] * history[len - 1 - i]` for `i < lags`.
///
/// # Errors
/// * [`ForecastError::InsufficientHistory`] when `history` holds fewer than `lags` values.
/// * [`ForecastError::DimensionMismatch`] when `coeffs` holds fewer than `lags` values.
///
/// # Example
/// ```
/// use arima_gd::models::arima::predict_ar;
///
/// let yhat = predict_ar(&[1.0, 2.0, 3.0, 4.0, 5.0], 2, &[0.5, 0.25]).unwrap();
/// assert!((yhat - 3.5).abs() < 1e-12);
/// ```
pub fn predict_ar(history: &[f64], lags: usize, coeffs: &[f64]) -> Result<f64> {
    if history.len() < lags {
        return Err(ForecastError::InsufficientHistory {
            lags,
            available: history.len(),
        });
    }
    if coeffs.len() < lags {
        return Err(ForecastError::DimensionMismatch {
            expected: lags,
            got: coeffs.len(),
        });
    }

    Ok(coeffs
        .iter()
        .take(lags)
        .zip(history.iter().rev())
        .map(|(c, x)| c * x)
        .sum())
}

/// Moving-average prediction from the most recent residuals.
///
/// Uses up to `q` residuals, newest first, each clamped to `[-bound, bound]`.
/// A trace shorter than `q` contributes only the residuals it has.
///
/// # Errors
/// * [`ForecastError::InvalidParameter`] unless `bound` is finite and positive.
/// * [`ForecastError::DimensionMismatch`] when `theta` holds fewer than `q` values.
pub fn predict_ma(errors: &[f64], q: usize, theta: &[f64], bound: f64) -> Result<f64> {
    check_bound("residual bound", bound)?;
    if theta.len() < q {
        return Err(ForecastError::DimensionMismatch {
            expected: q,
            got: theta.len(),
        });
    }

    Ok(theta
        .iter()
        .take(q)
        .zip(errors.iter().rev())
        .map(|(t, &e)| t * e.clamp(-bound, bound))
        .sum())
}
