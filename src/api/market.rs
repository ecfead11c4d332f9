use crate::error::{AppError, Result};
use crate::types::{Coin, MarketData, Timeframe, COINS};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

/// Query params for the market endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct MarketQuery {
    #[serde(default)]
    pub timeframe: Option<String>,
}

impl MarketQuery {
    /// Parsed timeframe, defaulting to 30 days when absent.
    pub fn timeframe(&self) -> Result<Timeframe> {
        match self.timeframe.as_deref() {
            None | Some("") => Ok(Timeframe::default()),
            Some(raw) => raw.parse().map_err(AppError::BadRequest),
        }
    }
}

/// GET /api/market/:coin_id
async fn get_market(
    State(state): State<AppState>,
    Path(coin_id): Path<String>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<MarketData>> {
    let coin =
        Coin::find(&coin_id).ok_or_else(|| AppError::NotFound(format!("Unknown coin: {}", coin_id)))?;
    let timeframe = query.timeframe()?;

    debug!("Market snapshot requested for {} ({}d)", coin.id, timeframe);
    let data = state.market.snapshot(&coin, timeframe)?;
    Ok(Json(data))
}

/// GET /api/coins
async fn get_coins() -> Json<&'static [Coin]> {
    Json(COINS)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/market/:coin_id", get(get_market))
        .route("/api/coins", get(get_coins))
}
