use std::sync::Arc;

use anyhow::{Context, Result};
use quick_spell::{routes, AppState, Config, Dictionary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quick_spell=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QuickSpell server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // A game cannot be dealt without a dictionary, so this is fatal
    let dictionary = Dictionary::load(&config.game.dictionary_path)
        .await
        .with_context(|| {
            format!(
                "Download a word list to {} (or set DICTIONARY_PATH)",
                config.game.dictionary_path
            )
        })?;

    let addr = config.server_addr();
    let state = Arc::new(AppState::new(config, dictionary));
    let app = routes::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
