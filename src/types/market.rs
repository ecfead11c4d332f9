use super::Series;
use serde::{Deserialize, Serialize};

/// A tradable asset shown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coin {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Chart line color.
    pub color: &'static str,
}

/// Supported assets. The first entry is the default selection.
pub const COINS: &[Coin] = &[
    Coin {
        id: "bitcoin",
        symbol: "BTC",
        name: "Bitcoin",
        color: "#F7931A",
    },
    Coin {
        id: "ethereum",
        symbol: "ETH",
        name: "Ethereum",
        color: "#627EEA",
    },
    Coin {
        id: "solana",
        symbol: "SOL",
        name: "Solana",
        color: "#14F195",
    },
];

impl Coin {
    /// Look up a coin by id (case-insensitive).
    pub fn find(id: &str) -> Option<Coin> {
        COINS
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
            .copied()
    }
}

impl Default for Coin {
    fn default() -> Self {
        COINS[0]
    }
}

/// History window selectable on the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "7")]
    Week,
    #[default]
    #[serde(rename = "30")]
    Month,
    #[serde(rename = "90")]
    Quarter,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Quarter];

    /// Number of daily points in the window.
    pub fn days(&self) -> usize {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches(|c: char| c == 'd' || c == 'D') {
            "7" => Ok(Timeframe::Week),
            "30" => Ok(Timeframe::Month),
            "90" => Ok(Timeframe::Quarter),
            _ => Err(format!("Unknown timeframe: {}", s)),
        }
    }
}

/// Descriptive model quality figures. Not derived from the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub rmse: f64,
    pub mae: f64,
    /// Percentage string, e.g. "85.2%".
    pub accuracy: String,
    #[serde(default)]
    pub volume_24h: f64,
    #[serde(default)]
    pub market_cap: f64,
}

impl Default for ModelMetrics {
    fn default() -> Self {
        Self {
            rmse: 120.5,
            mae: 85.2,
            accuracy: "85.2%".to_string(),
            volume_24h: 3_450_000_000.0,
            market_cap: 875_000_000_000.0,
        }
    }
}

/// Body of `GET /api/market/{coinId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub history: Series,
    pub prediction: Series,
    pub current_price: f64,
    pub metrics: ModelMetrics,
}
