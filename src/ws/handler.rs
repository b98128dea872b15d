//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_echo;
use crate::app_state::AppState;

/// `GET /ws/echo` — Upgrade HTTP connection to an echo WebSocket.
pub async fn ws_echo_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    state
        .echo
        .apply(ws)
        .on_failed_upgrade(|err| tracing::warn!(error = %err, "ws upgrade failed"))
        .on_upgrade(run_echo)
}
