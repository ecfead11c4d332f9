//! Synthetic price series standing in for a forecasting model.
//!
//! History is a slow sine oscillation around the current price with up to 5%
//! of uniform noise on top. The forecast is a linear ramp anchored at the last
//! historical price, one percent per step.

use crate::error::{AppError, Result};
use crate::types::{PricePoint, Series};
use rand::Rng;

/// Historical points generated when no timeframe is given.
pub const DEFAULT_HISTORY_DAYS: usize = 30;

/// Forecast points generated per request.
pub const DEFAULT_PREDICTION_DAYS: usize = 7;

/// Mock series generator.
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    history_len: usize,
    prediction_len: usize,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DAYS, DEFAULT_PREDICTION_DAYS)
    }
}

impl SeriesGenerator {
    pub fn new(history_len: usize, prediction_len: usize) -> Self {
        Self {
            history_len,
            prediction_len,
        }
    }

    /// Same generator with a different history length.
    pub fn with_history_len(self, history_len: usize) -> Self {
        Self {
            history_len,
            ..self
        }
    }

    /// Same generator with a different forecast length.
    pub fn with_prediction_len(self, prediction_len: usize) -> Self {
        Self {
            prediction_len,
            ..self
        }
    }

    /// Generate `(history, prediction)` around `current_price`.
    ///
    /// An empty history yields an empty forecast since there is nothing to
    /// anchor the ramp on.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        current_price: f64,
        rng: &mut R,
    ) -> Result<(Series, Series)> {
        let history = self.history(current_price, rng)?;
        let prediction = match history.last() {
            Some(last) => self.prediction(last.price)?,
            None => Vec::new(),
        };
        Ok((history, prediction))
    }

    /// Historical series: `price[i] = p * (1 + sin(i/10)*0.1 + u*0.05)`.
    pub fn history<R: Rng + ?Sized>(&self, current_price: f64, rng: &mut R) -> Result<Series> {
        validate_price(current_price)?;

        Ok((0..self.history_len)
            .map(|i| {
                let wave = (i as f64 / 10.0).sin() * 0.1;
                let noise = rng.gen::<f64>() * 0.05;
                PricePoint::new(format!("Day {}", i + 1), current_price * (1.0 + wave + noise))
            })
            .collect())
    }

    /// Forecast series: `price[i] = anchor * (1 + i/100)`.
    pub fn prediction(&self, anchor: f64) -> Result<Series> {
        validate_price(anchor)?;

        Ok((0..self.prediction_len)
            .map(|i| {
                PricePoint::new(format!("Pred {}", i + 1), anchor * (1.0 + i as f64 / 100.0))
            })
            .collect())
    }
}

fn validate_price(price: f64) -> Result<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "current price must be a positive number, got {}",
            price
        )))
    }
}
