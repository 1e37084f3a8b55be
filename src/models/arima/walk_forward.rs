//! One-step-ahead forecasting over a held-out split.

use crate::error::Result;
use crate::models::arima::predict::{check_bound, predict_ar, predict_ma};
use crate::models::arima::state::{History, TrainingState};

/// Differenced-scale output of a walk-forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkForward {
    /// One forecast per held-out value.
    pub forecasts: Vec<f64>,
    /// `actual - forecast` for each held-out value.
    pub residuals: Vec<f64>,
}

/// Forecast each value of `test` from everything observed before it.
///
/// The AR window starts as the full training split and gains the true
/// held-out value after every step. Residuals extend the trainer's error
/// trace in `state`, so later MA terms see them. Coefficients are not
/// updated.
///
/// # Errors
/// [`ForecastError::InvalidParameter`](crate::error::ForecastError::InvalidParameter)
/// unless `residual_bound` is finite and positive; nothing is appended to
/// the trace in that case.
pub fn walk_forward(
    state: &mut TrainingState,
    train: &[f64],
    test: &[f64],
    residual_bound: f64,
) -> Result<WalkForward> {
    check_bound("residual bound", residual_bound)?;
    let p = state.phi.len();
    let q = state.theta.len();

    let mut history = History::from_slice(train);
    let mut forecasts = Vec::with_capacity(test.len());
    let mut residuals = Vec::with_capacity(test.len());

    for &actual in test {
        let ar_part = predict_ar(history.as_slice(), p, state.phi.as_slice())?;
        let ma_part = predict_ma(
            state.errors.as_slice(),
            q,
            state.theta.as_slice(),
            residual_bound,
        )?;
        let yhat = ar_part + ma_part;
        forecasts.push(yhat);

        let error = actual - yhat;
        state.errors.push(error);
        residuals.push(error);
        history.push(actual);
    }

    Ok(WalkForward {
        forecasts,
        residuals,
    })
}
