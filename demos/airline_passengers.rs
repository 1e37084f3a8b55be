//! ARIMA(2,1,2) on the airline passengers series, normalized and raw.
//!
//! Run with: cargo run --example airline_passengers

use arima_gd::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Monthly international airline passengers, 1949-1960.
const AIR_PASSENGERS: [f64; 144] = [
    112.0, 118.0, 132.0, 129.0, 121.0, 135.0, 148.0, 148.0, 136.0, 119.0, 104.0, 118.0, //
    115.0, 126.0, 141.0, 135.0, 125.0, 149.0, 170.0, 170.0, 158.0, 133.0, 114.0, 140.0, //
    145.0, 150.0, 178.0, 163.0, 172.0, 178.0, 199.0, 199.0, 184.0, 162.0, 146.0, 166.0, //
    171.0, 180.0, 193.0, 181.0, 183.0, 218.0, 230.0, 242.0, 209.0, 191.0, 172.0, 194.0, //
    196.0, 196.0, 236.0, 235.0, 229.0, 243.0, 264.0, 272.0, 237.0, 211.0, 180.0, 201.0, //
    204.0, 188.0, 235.0, 227.0, 234.0, 264.0, 302.0, 293.0, 259.0, 229.0, 203.0, 229.0, //
    242.0, 233.0, 267.0, 269.0, 270.0, 315.0, 364.0, 347.0, 312.0, 274.0, 237.0, 278.0, //
    284.0, 277.0, 317.0, 313.0, 318.0, 374.0, 413.0, 405.0, 355.0, 306.0, 271.0, 306.0, //
    315.0, 301.0, 356.0, 348.0, 355.0, 422.0, 465.0, 467.0, 404.0, 347.0, 305.0, 336.0, //
    340.0, 318.0, 362.0, 348.0, 363.0, 435.0, 491.0, 505.0, 404.0, 359.0, 310.0, 337.0, //
    360.0, 342.0, 406.0, 396.0, 420.0, 472.0, 548.0, 559.0, 463.0, 407.0, 362.0, 405.0, //
    417.0, 391.0, 419.0, 461.0, 472.0, 535.0, 622.0, 606.0, 508.0, 461.0, 390.0, 432.0, //
];

const N_FORECAST: usize = 20;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arima_gd=info".into()),
        )
        .init();

    println!("=== ARIMA(2,1,2) by Gradient Descent ===\n");

    let model = ARIMA::new(2, 1, 2);
    let scaled = standardize(&AIR_PASSENGERS);

    println!("--- Normalized series ---");
    let outcome = model.fit_forecast(&Series::new(scaled.data.clone())?, N_FORECAST)?;
    report(&outcome);
    if let ForecastOutcome::Completed(result) = &outcome {
        let passengers = scaled.inverse_values(result.values());
        println!("Forecast in passengers: {:.1?}", passengers);
    }

    println!("\n--- Raw series ---");
    let outcome = model.fit_forecast(&Series::new(AIR_PASSENGERS.to_vec())?, N_FORECAST)?;
    report(&outcome);

    Ok(())
}

fn report(outcome: &ForecastOutcome) {
    match outcome {
        ForecastOutcome::Completed(result) => {
            println!("AR coefficients: {:?}", result.ar_coefficients());
            println!("MA coefficients: {:?}", result.ma_coefficients());
            println!("MSE: {:.3}", result.mse());
            println!("MAE: {:.3}", result.mae());
            if result.is_finite() {
                println!("Forecast: {:.3?}", result.values());
            } else {
                println!("Warning: NaNs in forecast. Skipping plot.");
            }
        }
        ForecastOutcome::Diverged {
            divergence,
            horizon,
        } => {
            println!(
                "Numerical instability detected at epoch {}, t = {}",
                divergence.epoch, divergence.step
            );
            println!("Forecast: {:?}", vec![f64::NAN; *horizon]);
        }
    }
}
