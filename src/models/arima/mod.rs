//! ARIMA (Autoregressive Integrated Moving Average) fitted by gradient descent.
//!
//! This module provides:
//! - Differencing and its inverse for the integrated part
//! - AR and MA point predictors
//! - An online gradient-descent trainer with bounded updates
//! - Walk-forward forecasting and evaluation on the original scale

mod diff;
mod evaluate;
mod model;
mod predict;
mod state;
mod trainer;
mod walk_forward;

pub use diff::{difference, inverse_difference};
pub use evaluate::{evaluate, Evaluation};
pub use model::{ARIMASpec, ForecastOutcome, ARIMA};
pub use predict::{predict_ar, predict_ma, RESIDUAL_BOUND};
pub use state::{Coefficients, ErrorTrace, History, TrainingState};
pub use trainer::{Divergence, Trainer, TrainerConfig, TrainingOutcome, DEFAULT_SEED};
pub use walk_forward::{walk_forward, WalkForward};
