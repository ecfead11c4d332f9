use crate::types::COINS;
use std::collections::HashMap;
use std::env;
use tracing::warn;

/// Default port of the backend, matching what the dashboard expects.
pub const DEFAULT_PORT: u16 = 8000;

/// Price used for any coin without an explicit override.
pub const DEFAULT_PRICE: f64 = 12345.67;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Seed for the mock series generator. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Number of forecast points per market response.
    pub prediction_days: usize,
    /// Current price per coin id.
    pub coin_prices: HashMap<String, f64>,
    /// Aggregate sentiment score served by `/api/sentiment` (0-100).
    pub sentiment_score: u8,
    /// Base URL the dashboard client talks to.
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            seed: None,
            prediction_days: 7,
            coin_prices: COINS
                .iter()
                .map(|coin| (coin.id.to_string(), DEFAULT_PRICE))
                .collect(),
            sentiment_score: 65,
            backend_url: format!("http://localhost:{}", DEFAULT_PORT),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let default_price =
            parse_price("DEFAULT_PRICE", env::var("DEFAULT_PRICE").ok()).unwrap_or(DEFAULT_PRICE);

        // PRICE_BITCOIN, PRICE_ETHEREUM, ... override the default per coin
        let coin_prices = COINS
            .iter()
            .map(|coin| {
                let key = format!("PRICE_{}", coin.id.to_uppercase());
                let price = parse_price(&key, env::var(&key).ok()).unwrap_or(default_price);
                (coin.id.to_string(), price)
            })
            .collect();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            seed: env::var("AUGUR_SEED").ok().and_then(|v| v.parse().ok()),
            prediction_days: env::var("PREDICTION_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.prediction_days),
            coin_prices,
            sentiment_score: env::var("SENTIMENT_SCORE")
                .ok()
                .and_then(|v| v.parse::<u8>().ok())
                .map(|s| s.min(100))
                .unwrap_or(defaults.sentiment_score),
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
        }
    }

    /// Configured current price for a coin.
    pub fn price_for(&self, coin_id: &str) -> Option<f64> {
        self.coin_prices.get(coin_id).copied()
    }
}

/// Parse a price override. Anything but a finite positive number is ignored.
fn parse_price(key: &str, raw: Option<String>) -> Option<f64> {
    let raw = raw?;
    let price = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p: &f64| p.is_finite() && *p > 0.0);
    if price.is_none() {
        warn!("Ignoring {}={}: expected a positive price", key, raw);
    }
    price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.prediction_days, 7);
        assert_eq!(config.sentiment_score, 65);
        assert!(config.seed.is_none());
        assert_eq!(config.backend_url, "http://localhost:8000");
    }

    #[test]
    fn test_every_coin_has_a_price() {
        let config = Config::default();
        for coin in COINS {
            assert_eq!(config.price_for(coin.id), Some(DEFAULT_PRICE));
        }
        assert_eq!(config.price_for("dogecoin"), None);
    }

    #[test]
    fn test_price_override_rejects_non_positive() {
        for raw in ["0", "-5", "NaN", "inf", "abc", ""] {
            assert_eq!(parse_price("PRICE_SOLANA", Some(raw.to_string())), None, "{}", raw);
        }
        assert_eq!(parse_price("PRICE_SOLANA", None), None);
        assert_eq!(
            parse_price("PRICE_SOLANA", Some(" 150.5 ".to_string())),
            Some(150.5)
        );
    }
}
