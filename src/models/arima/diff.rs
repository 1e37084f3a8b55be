//! Differencing and its inverse for the integrated part of ARIMA.

use crate::error::{ForecastError, Result};

/// Apply differencing to a series.
///
/// Each pass replaces the series with `x[i] - x[i-1]`, shortening it by one.
///
/// # Arguments
/// * `series` - The input series
/// * `d` - Differencing order (number of passes)
///
/// # Errors
/// Returns [`ForecastError::InvalidOrder`] unless `series.len() > d`.
pub fn difference(series: &[f64], d: usize) -> Result<Vec<f64>> {
    if series.len() <= d {
        return Err(ForecastError::InvalidOrder {
            order: d,
            len: series.len(),
        });
    }

    let mut result = series.to_vec();
    for _ in 0..d {
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    Ok(result)
}

/// Reverse `d` passes of differencing by cumulative summation.
///
/// `seed` holds the first `d` values of the original series. For `d = 1`
/// the output starts at `seed[0]` and each following value adds the next
/// difference. Higher orders repeat that single-order inverse once per
/// level, starting each pass from the leading value of the seed differenced
/// down to that level.
///
/// The output has `differenced.len() + d` values.
///
/// # Errors
/// Returns [`ForecastError::InsufficientData`] when `seed` has fewer than `d` values.
pub fn inverse_difference(seed: &[f64], differenced: &[f64], d: usize) -> Result<Vec<f64>> {
    if d == 0 {
        return Ok(differenced.to_vec());
    }
    if seed.len() < d {
        return Err(ForecastError::InsufficientData {
            needed: d,
            got: seed.len(),
        });
    }

    let seed = &seed[..d];
    let mut result = differenced.to_vec();
    for level in (0..d).rev() {
        // seed.len() == d > level, so the differenced seed is never empty
        let start = difference(seed, level)?[0];
        result = cumulative_from(start, &result);
    }
    Ok(result)
}

/// Prefix `start` and accumulate each difference onto the running total.
fn cumulative_from(start: f64, differences: &[f64]) -> Vec<f64> {
    let mut integrated = Vec::with_capacity(differences.len() + 1);
    let mut cumsum = start;
    integrated.push(cumsum);
    for &diff in differences {
        cumsum += diff;
        integrated.push(cumsum);
    }
    integrated
}
