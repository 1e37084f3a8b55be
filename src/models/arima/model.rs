//! ARIMA model fitted by online gradient descent.

use tracing::warn;

use crate::core::{ForecastResult, Series};
use crate::error::{ForecastError, Result};
use crate::models::arima::diff::difference;
use crate::models::arima::evaluate::evaluate;
use crate::models::arima::trainer::{Divergence, Trainer, TrainerConfig, TrainingOutcome};
use crate::models::arima::walk_forward::walk_forward;
use crate::utils::AccuracyMetrics;

/// ARIMA model specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ARIMASpec {
    /// AR order (p)
    pub p: usize,
    /// Differencing order (d)
    pub d: usize,
    /// MA order (q)
    pub q: usize,
}

impl ARIMASpec {
    /// Create a new ARIMA specification.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Total number of coefficients (AR + MA).
    pub fn num_params(&self) -> usize {
        self.p + self.q
    }
}

impl Default for ARIMASpec {
    fn default() -> Self {
        Self::new(2, 1, 2)
    }
}

/// Result of [`ARIMA::fit_forecast`].
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    /// Training finished and the held-out split was forecast.
    Completed(ForecastResult),
    /// Training hit a non-finite prediction; nothing was forecast.
    Diverged {
        divergence: Divergence,
        /// Requested number of forecasts.
        horizon: usize,
    },
}

impl ForecastOutcome {
    pub fn is_diverged(&self) -> bool {
        matches!(self, ForecastOutcome::Diverged { .. })
    }

    /// The original-scale forecasts, or `horizon` NaNs if training diverged.
    pub fn forecast_values(&self) -> Vec<f64> {
        match self {
            ForecastOutcome::Completed(result) => result.values().to_vec(),
            ForecastOutcome::Diverged { horizon, .. } => vec![f64::NAN; *horizon],
        }
    }

    /// MSE/MAE of a completed run.
    pub fn metrics(&self) -> Option<&AccuracyMetrics> {
        match self {
            ForecastOutcome::Completed(result) => Some(result.metrics()),
            ForecastOutcome::Diverged { .. } => None,
        }
    }

    /// Turn divergence into [`ForecastError::NumericalDivergence`].
    pub fn into_result(self) -> Result<ForecastResult> {
        match self {
            ForecastOutcome::Completed(result) => Ok(result),
            ForecastOutcome::Diverged { divergence, .. } => Err(divergence.into()),
        }
    }
}

/// ARIMA(p, d, q) forecaster trained by online gradient descent.
///
/// The series is differenced `d` times and split into a training part and
/// the last `n_forecast` differenced values. AR and MA coefficients are
/// fitted on the training part, the held-out part is forecast one step at
/// a time with the true value revealed after each step, and the forecasts
/// are integrated back to the original scale and scored.
///
/// Every call owns its own coefficients and traces; a model can be reused
/// and shared across threads.
///
/// # Example
/// ```
/// use arima_gd::core::Series;
/// use arima_gd::models::arima::ARIMA;
///
/// let values: Vec<f64> = (0..60).map(|i| (i as f64 * 0.3).sin() + 0.05 * i as f64).collect();
/// let series = Series::new(values).unwrap();
///
/// let outcome = ARIMA::new(2, 1, 1).fit_forecast(&series, 6).unwrap();
/// assert_eq!(outcome.forecast_values().len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ARIMA {
    spec: ARIMASpec,
    config: TrainerConfig,
}

impl ARIMA {
    /// Create a new ARIMA model with the default trainer configuration.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            spec: ARIMASpec::new(p, d, q),
            config: TrainerConfig::default(),
        }
    }

    /// Create a model from a specification.
    pub fn from_spec(spec: ARIMASpec) -> Self {
        Self {
            spec,
            config: TrainerConfig::default(),
        }
    }

    /// Replace the trainer configuration.
    pub fn with_config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initialization seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Get the model specification.
    pub fn spec(&self) -> ARIMASpec {
        self.spec
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Fit on all but the last `n_forecast` differenced values, then forecast them.
    ///
    /// # Errors
    /// * [`ForecastError::InvalidParameter`] for `n_forecast == 0` or an invalid config.
    /// * [`ForecastError::InsufficientData`] unless
    ///   `len > d + n_forecast` and `len - d - n_forecast > p`.
    ///
    /// Divergence during training is not an error; it is reported as
    /// [`ForecastOutcome::Diverged`].
    pub fn fit_forecast(&self, series: &Series, n_forecast: usize) -> Result<ForecastOutcome> {
        let ARIMASpec { p, d, q } = self.spec;
        self.check_lengths(series.len(), n_forecast)?;
        let trainer = Trainer::new(self.config.clone())?;

        let diff_series = difference(series.values(), d)?;
        let (train, test) = diff_series.split_at(diff_series.len() - n_forecast);

        let mut state = match trainer.train(train, p, q)? {
            TrainingOutcome::Fitted(state) => state,
            TrainingOutcome::Diverged(divergence) => {
                warn!(
                    p,
                    d,
                    q,
                    horizon = n_forecast,
                    "training diverged, returning NaN forecast"
                );
                return Ok(ForecastOutcome::Diverged {
                    divergence,
                    horizon: n_forecast,
                });
            }
        };

        let forecast = walk_forward(&mut state, train, test, self.config.residual_bound)?;
        let evaluation = evaluate(series.values(), &forecast.forecasts, d)?;

        Ok(ForecastOutcome::Completed(ForecastResult::new(
            evaluation.values,
            evaluation.actual,
            forecast.forecasts,
            forecast.residuals,
            state.phi.into_vec(),
            state.theta.into_vec(),
            evaluation.metrics,
        )))
    }

    fn check_lengths(&self, len: usize, n_forecast: usize) -> Result<()> {
        let ARIMASpec { p, d, .. } = self.spec;
        if n_forecast == 0 {
            return Err(ForecastError::InvalidParameter(
                "n_forecast must be at least 1".to_string(),
            ));
        }
        // training split needs p + 1 values: p lags plus one target
        let needed = d
            .checked_add(n_forecast)
            .and_then(|n| n.checked_add(p))
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "p + d + n_forecast overflows (p = {}, d = {}, n_forecast = {})",
                    p, d, n_forecast
                ))
            })?;
        if len < needed {
            return Err(ForecastError::InsufficientData { needed, got: len });
        }
        Ok(())
    }
}
