//! Augur - crypto price prediction dashboard backend
//!
//! The server side serves mock market history, a forecast ramp, sentiment and
//! news over HTTP. The client side is a headless dashboard: a typed client for
//! the same endpoints plus a reducer-driven view state.

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod services;
pub mod types;

use config::Config;
use services::{MarketService, NewsService, SentimentService};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub market: Arc<MarketService>,
    pub sentiment: Arc<SentimentService>,
    pub news: Arc<NewsService>,
}

impl AppState {
    /// Build all services from configuration.
    pub fn new(config: Config) -> Self {
        let market = MarketService::new(&config);
        let sentiment = SentimentService::new(config.sentiment_score);

        Self {
            config: Arc::new(config),
            market,
            sentiment,
            news: NewsService::new(),
        }
    }
}

// Re-export commonly used types
pub use types::*;
