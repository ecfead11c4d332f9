//! HTTP client for the market, sentiment and news endpoints.

use crate::types::{MarketData, NewsItem, SentimentSnapshot, Timeframe};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Client-side failure. Connection errors, non-OK statuses and undecodable
/// bodies are all reported the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network failure: {0}")]
    NetworkFailure(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::NetworkFailure(e.to_string())
    }
}

/// Typed client for an augur backend.
#[derive(Clone)]
pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("augur/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/market/{coin_id}?timeframe={7|30|90}
    pub async fn fetch_market(
        &self,
        coin_id: &str,
        timeframe: Timeframe,
    ) -> Result<MarketData, ClientError> {
        self.get_json(&format!(
            "/api/market/{}?timeframe={}",
            coin_id, timeframe
        ))
        .await
    }

    /// GET /api/sentiment
    pub async fn fetch_sentiment(&self) -> Result<SentimentSnapshot, ClientError> {
        self.get_json("/api/sentiment").await
    }

    /// GET /api/news
    pub async fn fetch_news(&self) -> Result<Vec<NewsItem>, ClientError> {
        self.get_json("/api/news").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let excerpt: String = text.chars().take(200).collect();
            warn!("{} returned {}: {}", url, status, excerpt);
            return Err(ClientError::NetworkFailure(format!(
                "{} returned {}",
                path, status
            )));
        }

        Ok(response.json().await?)
    }
}
