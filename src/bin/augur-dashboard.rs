//! Headless dashboard: loads one asset/timeframe from the backend and logs
//! what the dashboard would show.
//!
//! Usage: `augur-dashboard [coin-id] [7|30|90]`

use anyhow::anyhow;
use augur::client::MarketClient;
use augur::config::Config;
use augur::dashboard::Dashboard;
use augur::types::{Coin, Timeframe};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let mut args = std::env::args().skip(1);

    let coin = match args.next() {
        Some(id) => Coin::find(&id).ok_or_else(|| anyhow!("Unknown coin: {}", id))?,
        None => Coin::default(),
    };
    let timeframe = match args.next() {
        Some(raw) => raw.parse::<Timeframe>().map_err(|e| anyhow!(e))?,
        None => Timeframe::default(),
    };

    info!("Loading dashboard from {}", config.backend_url);
    let dashboard = Dashboard::new(MarketClient::new(config.backend_url.clone()), config.seed)
        .with_selection(coin, timeframe);

    let generation = dashboard.load();
    let state = dashboard.settled(generation).await;

    if let Some(ref banner) = state.error {
        warn!("Connection Warning: {}", banner);
    }
    info!("{}", state.summary());

    let chart = state.chart();
    info!(
        "Chart: {} historical points, {} predicted points, bridge at {}",
        chart.solid().count(),
        chart.prediction.len(),
        chart
            .bridge()
            .map(|p| p.date.as_str())
            .unwrap_or("-"),
    );
    if let Some(placeholder) = state.news_placeholder() {
        info!("News: {}", placeholder);
    }
    for item in &state.news {
        info!("[{:?}] {} ({}, {})", item.sentiment, item.title, item.source, item.time);
    }

    Ok(())
}
