//! Property-based tests for differencing, prediction and training.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use arima_gd::core::Series;
use arima_gd::models::arima::{
    difference, inverse_difference, predict_ma, Trainer, TrainerConfig, TrainingOutcome, ARIMA,
    RESIDUAL_BOUND,
};
use proptest::prelude::*;

/// Strategy for generating series values of moderate magnitude.
fn values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, min_len..max_len)
}

// =============================================================================
// Property: inverse_difference undoes difference
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn difference_round_trips(
        // third-order integration compounds rounding, so keep series short and moderate
        values in prop::collection::vec(-100.0..100.0_f64, 4..30),
        d in 1usize..=3
    ) {
        let diff = difference(&values, d).unwrap();
        prop_assert_eq!(diff.len(), values.len() - d);

        let restored = inverse_difference(&values[..d], &diff, d).unwrap();
        prop_assert_eq!(restored.len(), values.len());
        for (r, v) in restored.iter().zip(values.iter()) {
            let tol = 1e-9 * (1.0 + v.abs());
            prop_assert!((r - v).abs() <= tol, "restored {} vs original {}", r, v);
        }
    }

    #[test]
    fn difference_rejects_short_series(
        values in values_strategy(0, 4),
        extra in 0usize..3
    ) {
        let d = values.len() + extra;
        prop_assert!(difference(&values, d).is_err());
    }
}

// =============================================================================
// Property: MA prediction is bounded by the clamped residuals
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn ma_prediction_is_bounded(
        errors in prop::collection::vec(-1e6..1e6_f64, 0..10),
        theta in prop::collection::vec(-10.0..10.0_f64, 3)
    ) {
        let yhat = predict_ma(&errors, 3, &theta, RESIDUAL_BOUND).unwrap();
        let bound: f64 = theta.iter().map(|t| t.abs() * RESIDUAL_BOUND).sum();
        prop_assert!(yhat.abs() <= bound + 1e-9);
    }
}

// =============================================================================
// Property: coefficients stay within bounds after training
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn trained_coefficients_stay_clamped(
        train in values_strategy(10, 60),
        p in 0usize..4,
        q in 0usize..4,
        learning_rate in 1e-4..1.0_f64,
        seed in any::<u64>()
    ) {
        let config = TrainerConfig::default()
            .with_epochs(3)
            .with_learning_rate(learning_rate)
            .with_seed(seed);
        let outcome = Trainer::new(config).unwrap().train(&train, p, q).unwrap();

        match outcome {
            TrainingOutcome::Fitted(state) => {
                for c in state.phi.as_slice().iter().chain(state.theta.as_slice()) {
                    prop_assert!((-10.0..=10.0).contains(c));
                }
                prop_assert_eq!(state.errors.len(), 3 * (train.len() - p));
            }
            TrainingOutcome::Diverged(_) => prop_assert!(false, "finite input diverged"),
        }
    }

    #[test]
    fn forecast_length_matches_horizon(
        values in values_strategy(40, 100),
        horizon in 1usize..15,
        seed in any::<u64>()
    ) {
        let series = Series::new(values).unwrap();
        let outcome = ARIMA::new(2, 1, 1)
            .with_seed(seed)
            .fit_forecast(&series, horizon)
            .unwrap();
        prop_assert_eq!(outcome.forecast_values().len(), horizon);
    }
}
