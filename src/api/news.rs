use crate::types::NewsItem;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};

/// GET /api/news
async fn get_news(State(state): State<AppState>) -> Json<Vec<NewsItem>> {
    Json(state.news.latest())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/news", get(get_news))
}
