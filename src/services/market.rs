use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::generator::SeriesGenerator;
use crate::types::{Coin, MarketData, ModelMetrics, PricePoint, Timeframe};
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Serves mock market snapshots per coin and timeframe.
///
/// Series are regenerated in full on every call; nothing is cached between
/// requests.
pub struct MarketService {
    /// Current price per coin id.
    prices: DashMap<String, f64>,
    generator: SeriesGenerator,
    rng: Mutex<StdRng>,
    metrics: ModelMetrics,
}

impl MarketService {
    /// Create a market service from configuration.
    pub fn new(config: &Config) -> Arc<Self> {
        let rng = match config.seed {
            Some(seed) => {
                info!("Mock series seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Arc::new(Self {
            prices: config
                .coin_prices
                .iter()
                .filter(|(id, price)| {
                    let valid = price.is_finite() && **price > 0.0;
                    if !valid {
                        warn!("Skipping invalid price {} for {}", price, id);
                    }
                    valid
                })
                .map(|(id, price)| (id.to_lowercase(), *price))
                .collect(),
            generator: SeriesGenerator::default().with_prediction_len(config.prediction_days),
            rng: Mutex::new(rng),
            metrics: ModelMetrics::default(),
        })
    }

    /// Current price for a coin.
    pub fn current_price(&self, coin_id: &str) -> Option<f64> {
        self.prices.get(&coin_id.to_lowercase()).map(|p| *p)
    }

    /// Replace the current price of a coin. Later snapshots oscillate around it.
    pub fn set_price(&self, coin_id: &str, price: f64) -> Result<()> {
        if !(price.is_finite() && price > 0.0) {
            return Err(AppError::InvalidInput(format!(
                "price for {} must be positive, got {}",
                coin_id, price
            )));
        }
        self.prices.insert(coin_id.to_lowercase(), price);
        Ok(())
    }

    /// Build a fresh snapshot for `coin` covering `timeframe` days of history.
    pub fn snapshot(&self, coin: &Coin, timeframe: Timeframe) -> Result<MarketData> {
        let current_price = self
            .current_price(coin.id)
            .ok_or_else(|| AppError::NotFound(format!("No price configured for {}", coin.id)))?;

        let generator = self.generator.with_history_len(timeframe.days());
        let (history, prediction) = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| AppError::Internal("series rng lock poisoned".to_string()))?;
            generator.generate(current_price, &mut *rng)?
        };

        debug!(
            "Generated {} history / {} prediction points for {} ({}d)",
            history.len(),
            prediction.len(),
            coin.id,
            timeframe
        );

        Ok(MarketData {
            history,
            prediction: prediction.iter().map(PricePoint::as_prediction).collect(),
            current_price,
            metrics: self.metrics.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Arc<MarketService> {
        MarketService::new(&Config {
            seed: Some(seed),
            ..Config::default()
        })
    }

    #[test]
    fn test_snapshot_lengths_follow_timeframe() {
        let service = seeded(1);
        let coin = Coin::default();
        for timeframe in Timeframe::ALL {
            let data = service.snapshot(&coin, timeframe).unwrap();
            assert_eq!(data.history.len(), timeframe.days());
            assert_eq!(data.prediction.len(), 7);
        }
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let coin = Coin::default();
        let a = seeded(42).snapshot(&coin, Timeframe::Month).unwrap();
        let b = seeded(42).snapshot(&coin, Timeframe::Month).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_regenerates_every_call() {
        let service = seeded(9);
        let coin = Coin::default();
        let a = service.snapshot(&coin, Timeframe::Week).unwrap();
        let b = service.snapshot(&coin, Timeframe::Week).unwrap();
        assert_ne!(a.history, b.history);
    }

    #[test]
    fn test_snapshot_flags_forecast_points() {
        let data = seeded(3).snapshot(&Coin::default(), Timeframe::Week).unwrap();
        assert!(data.history.iter().all(|p| !p.is_prediction));
        assert!(data.prediction.iter().all(|p| p.is_prediction));
    }

    #[test]
    fn test_invalid_configured_price_skipped() {
        let mut config = Config {
            seed: Some(5),
            ..Config::default()
        };
        config.coin_prices.insert("solana".to_string(), 0.0);
        config.coin_prices.insert("ethereum".to_string(), f64::NAN);
        let service = MarketService::new(&config);

        assert_eq!(service.current_price("solana"), None);
        assert_eq!(service.current_price("ethereum"), None);
        assert!(service
            .snapshot(&Coin::default(), Timeframe::Week)
            .is_ok());

        let solana = Coin::find("solana").unwrap();
        assert!(matches!(
            service.snapshot(&solana, Timeframe::Week),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_set_price() {
        let service = seeded(0);
        service.set_price("Solana", 150.0).unwrap();
        assert_eq!(service.current_price("solana"), Some(150.0));
        assert!(service.set_price("solana", 0.0).is_err());

        let coin = Coin::find("solana").unwrap();
        let data = service.snapshot(&coin, Timeframe::Week).unwrap();
        assert_eq!(data.current_price, 150.0);
    }
}
