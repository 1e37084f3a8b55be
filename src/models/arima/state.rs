//! Run-owned training state: bounded coefficients and append-only traces.

use rand::Rng;

use crate::error::Result;
use crate::models::arima::predict::check_bound;

/// Coefficient vector whose entries stay within `[-bound, bound]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    values: Vec<f64>,
    bound: f64,
}

impl Coefficients {
    /// Create a coefficient vector, clamping each initial value into range.
    ///
    /// # Errors
    /// [`ForecastError::InvalidParameter`](crate::error::ForecastError::InvalidParameter)
    /// unless `bound` is finite and positive.
    pub fn new(values: Vec<f64>, bound: f64) -> Result<Self> {
        check_bound("coefficient bound", bound)?;
        let values = values.into_iter().map(|v| v.clamp(-bound, bound)).collect();
        Ok(Self { values, bound })
    }

    /// Draw `len` coefficients from `N(0, 1) * scale`.
    pub fn random<R: Rng>(len: usize, scale: f64, bound: f64, rng: &mut R) -> Result<Self> {
        let values = (0..len).map(|_| standard_normal(rng) * scale).collect();
        Self::new(values, bound)
    }

    /// Add `delta` to entry `i`, then clamp it back into range.
    ///
    /// The bound was checked at construction, so the clamp cannot panic.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn nudge(&mut self, i: usize, delta: f64) {
        self.values[i] = (self.values[i] + delta).clamp(-self.bound, self.bound);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

/// Standard normal draw via the Box-Muller transform.
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // 1 - U keeps u1 in (0, 1] so the log is finite
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Append-only sequence of differenced observations used as the AR lag window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    values: Vec<f64>,
}

impl History {
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Append-only record of one-step residuals, read newest first.
///
/// Residuals are stored exactly as computed. Readers clamp them when
/// they feed the MA term or a coefficient update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTrace {
    residuals: Vec<f64>,
}

impl ErrorTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, residual: f64) {
        self.residuals.push(residual);
    }

    /// The residual `lag` steps back from the newest (0 is the newest).
    pub fn recent(&self, lag: usize) -> Option<f64> {
        self.residuals
            .len()
            .checked_sub(lag + 1)
            .map(|idx| self.residuals[idx])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.residuals
    }

    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }
}

/// Everything a single training run owns and hands on to walk-forward forecasting.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingState {
    /// AR coefficients (phi).
    pub phi: Coefficients,
    /// MA coefficients (theta).
    pub theta: Coefficients,
    /// Residuals accumulated across every epoch.
    pub errors: ErrorTrace,
}
