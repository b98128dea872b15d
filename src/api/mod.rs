//! HTTP API layer: route handlers and router composition.
//!
//! Routes are mounted at the root; there is no versioned prefix.

pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete HTTP router (everything except the WebSocket route).
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}
