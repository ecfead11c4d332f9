use crate::types::COINS;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Number of assets served by `/api/market`.
    coins: usize,
    /// Whether mock series are reproducible across restarts.
    seeded: bool,
}

/// GET /api/health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        coins: COINS.len(),
        seeded: state.config.seed.is_some(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_health_reports_seed() {
        let state = AppState::new(Config {
            seed: Some(1),
            ..Config::default()
        });

        let Json(response) = health(State(state)).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.coins, 3);
        assert!(response.seeded);
    }

    #[tokio::test]
    async fn test_health_unseeded() {
        let Json(response) = health(State(AppState::new(Config::default()))).await;
        assert!(!response.seeded);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"seeded\":false"));
    }
}
