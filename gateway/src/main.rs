//! Unitconv Gateway Binary
//!
//! REST service exposing unit conversions for length, weight,
//! temperature and currency, plus health and metrics endpoints.

use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unitconv_gateway::{routes, AppState, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting unitconv gateway");

    // Load configuration
    let config = GatewayConfig::from_env();
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    let state = AppState::new(config.clone())?;
    let app = routes::build_router(state);

    let listen: SocketAddr = format!("{}:{}", config.listen_addr, config.listen_port).parse()?;
    let listener = tokio::net::TcpListener::bind(listen).await?;

    info!(
        %listen,
        provider = %config.currency_api_url,
        "Gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutdown signal received");
}
