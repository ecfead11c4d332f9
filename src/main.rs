use augur::api;
use augur::config::Config;
use augur::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting augur server on {}:{}", config.host, config.port);
    if config.seed.is_none() {
        info!("AUGUR_SEED not set, mock series are entropy-seeded");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);
    let app = api::app(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("augur server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
