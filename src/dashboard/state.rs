use crate::services::{metrics, stitch};
use crate::types::{
    Coin, MarketData, ModelMetrics, NewsItem, SentimentSnapshot, Series, StitchedSeries,
    Timeframe, Trend,
};

/// Banner shown when the backend cannot be reached.
pub const BACKEND_WARNING: &str = "Ensure Backend is running on port 8000. Displaying mock data.";

/// Everything fetched for one asset/timeframe selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub market: MarketData,
    pub sentiment: SentimentSnapshot,
    pub news: Vec<NewsItem>,
}

/// Immutable snapshot of what the dashboard shows.
///
/// Only [`reduce`](super::reduce) produces new values. `generation` increases
/// with every selection; results tagged with an older generation are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub coin: Coin,
    pub timeframe: Timeframe,
    pub generation: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub history: Series,
    pub prediction: Series,
    pub current_price: f64,
    pub metrics: ModelMetrics,
    pub sentiment: SentimentSnapshot,
    pub news: Vec<NewsItem>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            coin: Coin::default(),
            timeframe: Timeframe::default(),
            generation: 0,
            loading: false,
            error: None,
            history: Vec::new(),
            prediction: Vec::new(),
            current_price: crate::config::DEFAULT_PRICE,
            metrics: ModelMetrics::default(),
            sentiment: SentimentSnapshot::default(),
            news: Vec::new(),
        }
    }
}

impl ViewState {
    /// Chart series with the bridge point in place.
    pub fn chart(&self) -> StitchedSeries {
        stitch(&self.history, &self.prediction)
    }

    /// Latest period-over-period change in percent.
    pub fn change_pct(&self) -> f64 {
        metrics::change_pct(&self.history)
    }

    pub fn trend(&self) -> Trend {
        metrics::trend(&self.history)
    }

    pub fn next_target(&self) -> Option<f64> {
        metrics::next_target(&self.prediction)
    }

    /// Text for the "Next Target" card.
    pub fn next_target_text(&self) -> String {
        match self.next_target() {
            Some(price) => format_usd(price),
            None => "...".to_string(),
        }
    }

    /// Placeholder for an empty news list, if one should be shown.
    pub fn news_placeholder(&self) -> Option<&'static str> {
        if !self.news.is_empty() {
            None
        } else if self.loading {
            Some("Analyzing signals...")
        } else {
            Some("No signals detected")
        }
    }

    /// One-line text rendering, used by the headless dashboard.
    pub fn summary(&self) -> String {
        let arrow = match self.trend() {
            Trend::Up => "▲",
            Trend::Down => "▼",
        };
        let score = self.sentiment.score;
        format!(
            "{} ({}) {}d | {} {} {:.2}% | target {} | accuracy {} | sentiment {} {} | {} headlines",
            self.coin.name,
            self.coin.symbol,
            self.timeframe,
            format_usd(self.current_price),
            arrow,
            self.change_pct().abs(),
            self.next_target_text(),
            self.metrics.accuracy,
            score,
            score.label(),
            self.news.len(),
        )
    }
}

/// USD with thousands separators and up to two decimals.
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match frac {
        0 => format!("{}${}", sign, grouped),
        f if f % 10 == 0 => format!("{}${}.{}", sign, grouped, f / 10),
        f => format!("{}${}.{:02}", sign, grouped, f),
    }
}
