//! Yala Exchange API Server
//!
//! Main entry point for the Yala Exchange backend service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yala_api::{AppState, create_router};
use yala_db::UserRepository;
use yala_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yala=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    if config.auth.allow_passwordless_login {
        warn!("Passwordless login is enabled");
    }

    // Seed demo users
    let users = UserRepository::seeded().context("Failed to seed demo users")?;
    info!(users = users.count().await, "Seeded demo users");

    // Create application state and router
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(
        debounce_ms = config.preview.debounce_ms,
        "Conversion preview configured"
    );
    let app = create_router(AppState::new(config, users));

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
