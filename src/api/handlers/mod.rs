//! HTTP endpoint handlers grouped by concern.

pub mod diagnostic;
pub mod info;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the snapshot and diagnostic routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(info::routes())
        .merge(diagnostic::routes())
}
