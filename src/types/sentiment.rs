use serde::{Deserialize, Serialize};

/// Aggregate market mood, 0 (fear) to 100 (euphoria).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct SentimentScore(u8);

impl SentimentScore {
    pub const MAX: u8 = 100;

    /// Create a score, clamping anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Coarse three-band color used by the gauge.
    pub fn color(&self) -> SentimentColor {
        match self.0 {
            71..=u8::MAX => SentimentColor::Positive,
            0..=39 => SentimentColor::Negative,
            _ => SentimentColor::Neutral,
        }
    }

    /// Five-bucket qualitative label.
    pub fn label(&self) -> SentimentLabel {
        match self.0 {
            75..=u8::MAX => SentimentLabel::StrongBullish,
            55..=74 => SentimentLabel::Bullish,
            45..=54 => SentimentLabel::Neutral,
            25..=44 => SentimentLabel::Bearish,
            _ => SentimentLabel::StrongBearish,
        }
    }

    /// Gauge needle rotation in degrees: -180 at 0, 0 at 100.
    pub fn gauge_rotation(&self) -> f64 {
        f64::from(self.0) / 100.0 * 180.0 - 180.0
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self(65)
    }
}

impl From<u8> for SentimentScore {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<SentimentScore> for u8 {
    fn from(score: SentimentScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status color band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentColor {
    Positive,
    Neutral,
    Negative,
}

impl SentimentColor {
    pub fn hex(&self) -> &'static str {
        match self {
            SentimentColor::Positive => "#10b981",
            SentimentColor::Neutral => "#f59e0b",
            SentimentColor::Negative => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Strong Bullish")]
    StrongBullish,
    Bullish,
    Neutral,
    Bearish,
    #[serde(rename = "Strong Bearish")]
    StrongBearish,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::StrongBullish => "Strong Bullish",
            SentimentLabel::Bullish => "Bullish",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::StrongBearish => "Strong Bearish",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Net direction of large-holder transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhaleFlow {
    Inflow,
    Outflow,
}

/// Body of `GET /api/sentiment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub score: SentimentScore,
    pub label: String,
    pub twitter_vol: String,
    pub reddit_growth: String,
    pub whale_flow: WhaleFlow,
}

impl SentimentSnapshot {
    /// Snapshot for a score with the label derived from it.
    pub fn for_score(score: SentimentScore) -> Self {
        Self {
            score,
            label: score.label().to_string(),
            ..Self::default()
        }
    }
}

impl Default for SentimentSnapshot {
    fn default() -> Self {
        let score = SentimentScore::default();
        Self {
            score,
            label: score.label().to_string(),
            twitter_vol: "12%".to_string(),
            reddit_growth: "+3.5%".to_string(),
            whale_flow: WhaleFlow::Inflow,
        }
    }
}
