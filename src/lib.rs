//! # devprobe-server
//!
//! Diagnostic HTTP and WebSocket server for manually exercising HTTP
//! clients, proxies and load balancers.
//!
//! Every handler is stateless: it reports a fresh information snapshot,
//! answers with an arbitrary status code, waits for a requested duration,
//! redirects, or echoes WebSocket frames.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── Info handlers (api/)        /, /content/json, /content/html
//!     ├── Diagnostic handlers (api/)  /status, /exectime, /redirect
//!     ├── Echo handler (ws/)          /ws/echo
//!     │
//!     └── InfoSnapshot, ExecDuration (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod ws;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::ws::handler::ws_echo_handler;

/// Builds the full application router with tracing and CORS layers.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws/echo", get(ws_echo_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
