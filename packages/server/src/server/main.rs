// Main entry point for the site extractor API

use std::time::Duration;

use anyhow::{Context, Result};
use site_extractor::domains::session::SessionStore;
use site_extractor::kernel::ServerDeps;
use site_extractor::server::{build_app, AxumAppState};
use site_extractor::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often idle sessions are swept.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_extractor=debug,overpass_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Site Data Extractor API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let deps = ServerDeps::from_config(&config).context("Failed to build server dependencies")?;
    let sessions = SessionStore::new(config.default_viewport, config.session_ttl);

    // Sweep expired sessions in the background
    let sweeper = sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sweeper.cleanup_expired().await;
            if removed > 0 {
                tracing::info!(removed, "Expired sessions removed");
            }
        }
    });

    // Build application
    let app = build_app(AxumAppState::new(deps, sessions), &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
