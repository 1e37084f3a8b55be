//! Online gradient-descent training of AR and MA coefficients.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::{ForecastError, Result};
use crate::models::arima::predict::{check_bound, predict_ar, predict_ma, RESIDUAL_BOUND};
use crate::models::arima::state::{Coefficients, ErrorTrace, TrainingState};

/// Seed used when no explicit seed is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for the gradient-descent trainer.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    /// Number of passes over the training split.
    pub epochs: usize,
    /// Step size of every coefficient update.
    pub learning_rate: f64,
    /// Coefficients are clamped to `[-coefficient_bound, coefficient_bound]`.
    pub coefficient_bound: f64,
    /// Residuals are clamped to `[-residual_bound, residual_bound]` when used.
    pub residual_bound: f64,
    /// Standard deviation of the initial coefficients.
    pub init_scale: f64,
    /// Seed for coefficient initialization.
    pub seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 50,
            learning_rate: 0.0005,
            coefficient_bound: 10.0,
            residual_bound: RESIDUAL_BOUND,
            init_scale: 0.01,
            seed: DEFAULT_SEED,
        }
    }
}

impl TrainerConfig {
    /// Set the number of epochs.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the coefficient clamp bound.
    pub fn with_coefficient_bound(mut self, bound: f64) -> Self {
        self.coefficient_bound = bound;
        self
    }

    /// Set the residual clamp bound.
    pub fn with_residual_bound(mut self, bound: f64) -> Self {
        self.residual_bound = bound;
        self
    }

    /// Set the initialization scale.
    pub fn with_init_scale(mut self, scale: f64) -> Self {
        self.init_scale = scale;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(ForecastError::InvalidParameter(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        check_bound("coefficient_bound", self.coefficient_bound)?;
        check_bound("residual_bound", self.residual_bound)?;
        if !(self.init_scale.is_finite() && self.init_scale >= 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "init_scale must be finite and non-negative, got {}",
                self.init_scale
            )));
        }
        Ok(())
    }
}

/// Where training hit a non-finite prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    /// Epoch in which the non-finite value appeared.
    pub epoch: usize,
    /// Index into the training split of the step being predicted.
    pub step: usize,
}

impl From<Divergence> for ForecastError {
    fn from(d: Divergence) -> Self {
        ForecastError::NumericalDivergence {
            epoch: d.epoch,
            step: d.step,
        }
    }
}

/// Result of a training run.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingOutcome {
    /// Every epoch completed with finite predictions.
    Fitted(TrainingState),
    /// Training stopped at the first non-finite prediction.
    Diverged(Divergence),
}

/// Online gradient-descent trainer for ARIMA coefficients.
///
/// Each epoch walks the training split from index `p`, predicting every
/// value from the `p` values before it and from the newest `q` residuals,
/// then nudges phi and theta along the clamped residual. The residual
/// trace keeps growing across epochs and is handed to forecasting.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    /// Create a trainer after validating its configuration.
    pub fn new(config: TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Fit AR(p) and MA(q) coefficients against a differenced training split.
    ///
    /// # Errors
    /// [`ForecastError::InsufficientData`] unless `train.len() > p`.
    pub fn train(&self, train: &[f64], p: usize, q: usize) -> Result<TrainingOutcome> {
        if train.len() <= p {
            return Err(ForecastError::InsufficientData {
                needed: p + 1,
                got: train.len(),
            });
        }

        let mut state = self.initial_state(p, q)?;
        for epoch in 0..self.config.epochs {
            if let Some(divergence) = self.run_epoch(&mut state, train, epoch, p, q)? {
                warn!(
                    epoch = divergence.epoch,
                    step = divergence.step,
                    "numerical instability detected, aborting training"
                );
                return Ok(TrainingOutcome::Diverged(divergence));
            }
            debug!(epoch, residuals = state.errors.len(), "epoch complete");
        }

        info!(
            p,
            q,
            epochs = self.config.epochs,
            phi = ?state.phi.as_slice(),
            theta = ?state.theta.as_slice(),
            "training complete"
        );
        Ok(TrainingOutcome::Fitted(state))
    }

    /// Draw the starting coefficients from the seeded generator.
    pub fn initial_state(&self, p: usize, q: usize) -> Result<TrainingState> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let bound = self.config.coefficient_bound;
        let phi = Coefficients::random(p, self.config.init_scale, bound, &mut rng)?;
        let theta = Coefficients::random(q, self.config.init_scale, bound, &mut rng)?;
        Ok(TrainingState {
            phi,
            theta,
            errors: ErrorTrace::new(),
        })
    }

    /// One pass over `train`; returns the divergence point if a prediction is non-finite.
    fn run_epoch(
        &self,
        state: &mut TrainingState,
        train: &[f64],
        epoch: usize,
        p: usize,
        q: usize,
    ) -> Result<Option<Divergence>> {
        let alpha = self.config.learning_rate;
        let bound = self.config.residual_bound;

        for t in p..train.len() {
            let ar_part = predict_ar(&train[..t], p, state.phi.as_slice())?;
            let ma_part = predict_ma(state.errors.as_slice(), q, state.theta.as_slice(), bound)?;
            let yhat = ar_part + ma_part;
            if !(ar_part.is_finite() && ma_part.is_finite() && yhat.is_finite()) {
                return Ok(Some(Divergence { epoch, step: t }));
            }

            let error = train[t] - yhat;
            state.errors.push(error);
            let clamped = error.clamp(-bound, bound);

            for i in 0..p {
                state.phi.nudge(i, alpha * clamped * train[t - i - 1]);
            }
            for i in 0..q {
                if let Some(past) = state.errors.recent(i) {
                    state.theta.nudge(i, alpha * clamped * past);
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_series(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.4).sin()).collect()
    }

    fn fitted(outcome: TrainingOutcome) -> TrainingState {
        match outcome {
            TrainingOutcome::Fitted(state) => state,
            TrainingOutcome::Diverged(d) => panic!("unexpected divergence: {:?}", d),
        }
    }

    #[test]
    fn default_config_values() {
        let config = TrainerConfig::default();
        assert_eq!(config.epochs, 50);
        assert_eq!(config.learning_rate, 0.0005);
        assert_eq!(config.coefficient_bound, 10.0);
        assert_eq!(config.residual_bound, 100.0);
        assert_eq!(config.init_scale, 0.01);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = [
            TrainerConfig::default().with_epochs(0),
            TrainerConfig::default().with_learning_rate(0.0),
            TrainerConfig::default().with_learning_rate(f64::NAN),
            TrainerConfig::default().with_coefficient_bound(-1.0),
            TrainerConfig::default().with_residual_bound(f64::INFINITY),
            TrainerConfig::default().with_init_scale(-0.1),
        ];
        for config in bad {
            assert!(matches!(
                Trainer::new(config),
                Err(ForecastError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn residual_trace_accumulates_across_epochs() {
        let train = sine_series(30);
        let trainer = Trainer::new(TrainerConfig::default().with_epochs(4)).unwrap();
        let state = fitted(trainer.train(&train, 2, 1).unwrap());

        // (len - p) residuals per epoch, never reset
        assert_eq!(state.errors.len(), 4 * (30 - 2));
        assert_eq!(state.phi.len(), 2);
        assert_eq!(state.theta.len(), 1);
    }

    #[test]
    fn same_seed_gives_same_fit() {
        let train = sine_series(40);
        let config = TrainerConfig::default().with_seed(11).with_epochs(5);
        let a = fitted(Trainer::new(config.clone()).unwrap().train(&train, 2, 2).unwrap());
        let b = fitted(Trainer::new(config).unwrap().train(&train, 2, 2).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn coefficients_stay_clamped_under_huge_updates() {
        let train: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 1e4 } else { -1e4 })
            .collect();
        let config = TrainerConfig::default().with_learning_rate(0.5).with_epochs(3);
        match Trainer::new(config).unwrap().train(&train, 3, 2).unwrap() {
            TrainingOutcome::Fitted(state) => {
                for c in state.phi.as_slice().iter().chain(state.theta.as_slice()) {
                    assert!((-10.0..=10.0).contains(c), "coefficient {} out of range", c);
                }
            }
            TrainingOutcome::Diverged(_) => {}
        }
    }

    #[test]
    fn infinite_value_diverges_at_first_ar_step_that_sees_it() {
        let mut train = sine_series(30);
        train[10] = f64::INFINITY;
        let trainer = Trainer::new(TrainerConfig::default()).unwrap();

        // train[10] first enters the AR window when predicting index 11
        assert_eq!(
            trainer.train(&train, 2, 2).unwrap(),
            TrainingOutcome::Diverged(Divergence { epoch: 0, step: 11 })
        );
    }

    #[test]
    fn nan_value_diverges() {
        let mut train = sine_series(20);
        train[5] = f64::NAN;
        let outcome = Trainer::default().train(&train, 1, 0).unwrap();
        assert_eq!(
            outcome,
            TrainingOutcome::Diverged(Divergence { epoch: 0, step: 6 })
        );
    }

    #[test]
    fn training_split_must_exceed_ar_order() {
        let result = Trainer::default().train(&[1.0, 2.0], 2, 0);
        assert_eq!(
            result,
            Err(ForecastError::InsufficientData { needed: 3, got: 2 })
        );
    }

    #[test]
    fn pure_ma_model_trains() {
        let train = sine_series(25);
        let state = fitted(Trainer::default().train(&train, 0, 2).unwrap());
        assert!(state.phi.is_empty());
        assert_eq!(state.errors.len(), 50 * 25);
    }

    #[test]
    fn divergence_converts_to_error() {
        let err: ForecastError = Divergence { epoch: 3, step: 9 }.into();
        assert_eq!(err, ForecastError::NumericalDivergence { epoch: 3, step: 9 });
    }
}
