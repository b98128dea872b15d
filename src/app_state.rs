//! Shared application state injected into all Axum handlers.

use std::path::Path;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::EchoSettings;

/// Process-wide immutable settings available to handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// HTML template read by the HTML snapshot endpoint.
    pub template_path: Arc<Path>,
    /// WebSocket upgrade settings for the echo endpoint.
    pub echo: EchoSettings,
}

impl AppState {
    /// Builds the state from loaded configuration.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            template_path: Arc::from(config.template_path.as_path()),
            echo: EchoSettings::default(),
        }
    }
}
