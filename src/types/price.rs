use serde::{Deserialize, Serialize};

/// One sample on the chart timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Axis label, e.g. "Day 3" or "Pred 1".
    pub date: String,
    /// Price in USD.
    pub price: f64,
    /// Forecast points are drawn dashed.
    #[serde(rename = "isPrediction", default)]
    pub is_prediction: bool,
}

impl PricePoint {
    /// Create a historical (non-forecast) point.
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
            is_prediction: false,
        }
    }

    /// Copy of this point flagged as a forecast point.
    pub fn as_prediction(&self) -> Self {
        Self {
            is_prediction: true,
            ..self.clone()
        }
    }
}

/// Chronological sequence of price points.
pub type Series = Vec<PricePoint>;

/// History and forecast ready for charting.
///
/// `history` ends with the bridge point when a forecast is present, so the
/// two line segments meet without a gap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StitchedSeries {
    pub history: Series,
    pub prediction: Series,
}

impl StitchedSeries {
    /// Full chart sequence: history (with bridge) followed by the forecast.
    pub fn chart(&self) -> Series {
        self.history
            .iter()
            .chain(self.prediction.iter())
            .cloned()
            .collect()
    }

    /// Points drawn by the solid historical line.
    pub fn solid(&self) -> impl Iterator<Item = &PricePoint> {
        self.history.iter().filter(|p| !p.is_prediction)
    }

    /// The bridge point, if one was inserted.
    pub fn bridge(&self) -> Option<&PricePoint> {
        self.history.last().filter(|p| p.is_prediction)
    }
}

/// Direction of the latest period-over-period move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Non-negative changes count as up.
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}
