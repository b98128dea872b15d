//! devprobe-server entry point.
//!
//! Starts the Axum HTTP server with the diagnostic and WebSocket endpoints.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use devprobe_server::app_state::AppState;
use devprobe_server::build_app;
use devprobe_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    let addr = config.listen_addr();
    tracing::info!(
        %addr,
        template = %config.template_path.display(),
        "starting devprobe-server"
    );

    let app = build_app(AppState::new(&config));

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
