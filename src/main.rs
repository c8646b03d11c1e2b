use anyhow::Result;
use pastamore_site::config::Config;
use pastamore_site::server::{self, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pastamore_site=info".parse()?),
        )
        .init();

    info!("Starting Pastamore site");

    let config = Config::from_env()?;
    info!(
        "Default language: {} ({})",
        config.default_language.name(),
        config.default_language
    );

    let state = Arc::new(AppState::load(&config)?);
    server::serve(&config, state).await
}
