use move_relay::app;
use move_relay::config;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set - upstream calls will be rejected");
    }
    tracing::info!(model = %config.model, upstream = %config.base_url, "Upstream configured");

    let app = app::router(&config)?;

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
