use crate::types::SentimentSnapshot;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};

/// GET /api/sentiment
async fn get_sentiment(State(state): State<AppState>) -> Json<SentimentSnapshot> {
    Json(state.sentiment.snapshot())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/sentiment", get(get_sentiment))
}
