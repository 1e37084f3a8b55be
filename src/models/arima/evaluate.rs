//! Reconstruction of differenced forecasts and scoring against held-out data.

use tracing::{info, warn};

use crate::error::{ForecastError, Result};
use crate::models::arima::diff::inverse_difference;
use crate::utils::{calculate_metrics, AccuracyMetrics};

/// Original-scale forecasts scored against the values they predict.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub values: Vec<f64>,
    pub actual: Vec<f64>,
    pub metrics: AccuracyMetrics,
}

/// Integrate differenced forecasts back onto `series` and score them.
///
/// The forecasts cover the last `n` observations of `series`. The `d`
/// observations just before that window seed the inverse difference, and
/// the forecasts are accumulated from there without re-anchoring on the
/// revealed actuals.
///
/// Non-finite forecasts are returned as-is (with non-finite metrics).
pub fn evaluate(series: &[f64], differenced_forecasts: &[f64], d: usize) -> Result<Evaluation> {
    let n = differenced_forecasts.len();
    if n == 0 {
        return Err(ForecastError::EmptyData);
    }
    let needed = n.checked_add(d).ok_or_else(|| {
        ForecastError::InvalidParameter(format!("differencing order {} is too large", d))
    })?;
    if series.len() < needed {
        return Err(ForecastError::InsufficientData {
            needed,
            got: series.len(),
        });
    }

    let window_start = series.len() - n;
    let seed = &series[window_start - d..window_start];
    let reconstructed = inverse_difference(seed, differenced_forecasts, d)?;
    let values = reconstructed[reconstructed.len() - n..].to_vec();
    let actual = series[window_start..].to_vec();
    let metrics = calculate_metrics(&actual, &values)?;

    if values.iter().all(|v| v.is_finite()) {
        info!(mse = metrics.mse, mae = metrics.mae, "forecast evaluated");
    } else {
        warn!(horizon = n, "forecast contains non-finite values");
    }

    Ok(Evaluation {
        values,
        actual,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn order_1_accumulates_from_value_before_window() {
        let series = vec![10.0, 11.0, 13.0, 12.0, 15.0];
        // window = [12, 15], seed = 13
        let eval = evaluate(&series, &[-1.0, 2.0], 1).unwrap();

        assert_eq!(eval.values, vec![12.0, 14.0]);
        assert_eq!(eval.actual, vec![12.0, 15.0]);
        assert_relative_eq!(eval.metrics.mse, 0.5, epsilon = 1e-12);
        assert_relative_eq!(eval.metrics.mae, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn exact_differences_reproduce_actuals() {
        let series = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];
        let diffs = vec![4.0, -7.0];
        let eval = evaluate(&series, &diffs, 1).unwrap();
        assert_relative_eq!(eval.metrics.mse, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn order_0_scores_forecasts_directly() {
        let eval = evaluate(&[1.0, 2.0, 3.0], &[2.5, 3.5], 0).unwrap();
        assert_eq!(eval.values, vec![2.5, 3.5]);
        assert_relative_eq!(eval.metrics.mae, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_forecast_is_returned() {
        let eval = evaluate(&[1.0, 2.0, 3.0, 4.0], &[f64::NAN, 1.0], 1).unwrap();
        assert_eq!(eval.values.len(), 2);
        assert!(eval.values.iter().all(|v| v.is_nan()));
        assert!(!eval.metrics.is_finite());
    }

    #[test]
    fn series_must_cover_window_and_seed() {
        assert_eq!(
            evaluate(&[1.0, 2.0], &[0.0, 0.0], 1),
            Err(ForecastError::InsufficientData { needed: 3, got: 2 })
        );
        assert_eq!(evaluate(&[1.0], &[], 1), Err(ForecastError::EmptyData));
    }

    #[test]
    fn overflowing_order_is_rejected() {
        assert!(matches!(
            evaluate(&[1.0, 2.0], &[0.5], usize::MAX),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
