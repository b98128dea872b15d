//! Informational endpoints: the snapshot as text, JSON and HTML.

use std::path::Path;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::any;
use axum::{Json, Router};
use minijinja::{AutoEscape, Environment};

use crate::app_state::AppState;
use crate::domain::InfoSnapshot;
use crate::error::DiagError;

/// `Content-Type` of the HTML snapshot.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// `GET /` — Snapshot in its plain-text form.
#[utoipa::path(
    get,
    path = "/",
    tag = "Info",
    summary = "Text snapshot",
    description = "Returns the welcome message, local time and outbound address as `{msg time ip}`.",
    responses(
        (status = 200, description = "Snapshot text", body = String, content_type = "text/plain"),
    )
)]
pub async fn text_handler() -> impl IntoResponse {
    InfoSnapshot::capture().await.to_string()
}

/// `GET /content/json` — Snapshot as a flat JSON object.
#[utoipa::path(
    get,
    path = "/content/json",
    tag = "Info",
    summary = "JSON snapshot",
    description = "Also served at `/json` and `/json/`.",
    responses(
        (status = 200, description = "Snapshot object", body = InfoSnapshot),
    )
)]
pub async fn json_handler() -> impl IntoResponse {
    Json(InfoSnapshot::capture().await)
}

/// `GET /content/html` — Snapshot rendered through the HTML template.
///
/// # Errors
///
/// Returns [`DiagError::Template`] if the template cannot be read or
/// rendered.
#[utoipa::path(
    get,
    path = "/content/html",
    tag = "Info",
    summary = "HTML snapshot",
    description = "Renders the configured template with `WelcomeMsg`, `Time` and `HostIP`. Also served at `/html` and `/html/`.",
    responses(
        (status = 200, description = "Rendered page", body = String, content_type = "text/html"),
        (status = 500, description = "Template missing or invalid", body = String),
    )
)]
pub async fn html_handler(State(state): State<AppState>) -> Result<impl IntoResponse, DiagError> {
    let snapshot = InfoSnapshot::capture().await;
    let page = render_template_file(&state.template_path, &snapshot).await?;
    Ok(([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], page))
}

/// Reads `path` and renders it with the snapshot fields.
///
/// # Errors
///
/// Returns [`DiagError::Template`] on read, syntax or render failure.
pub async fn render_template_file(
    path: &Path,
    snapshot: &InfoSnapshot,
) -> Result<String, DiagError> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DiagError::Template(format!("{}: {e}", path.display())))?;
    render_snapshot(&source, snapshot)
}

/// Renders a template source with the snapshot fields, HTML-escaped.
///
/// # Errors
///
/// Returns [`DiagError::Template`] on syntax or render failure.
pub fn render_snapshot(source: &str, snapshot: &InfoSnapshot) -> Result<String, DiagError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    Ok(env.render_str(source, snapshot)?)
}

/// Snapshot routes, including the short `/json` and `/html` aliases.
/// Every HTTP method is accepted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", any(text_handler))
        .route("/content/json", any(json_handler))
        .route("/json", any(json_handler))
        .route("/json/", any(json_handler))
        .route("/content/html", any(html_handler))
        .route("/html", any(html_handler))
        .route("/html/", any(html_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    fn snapshot() -> InfoSnapshot {
        InfoSnapshot::new("12:00:00", IpAddr::V4(Ipv4Addr::new(172, 16, 0, 1)))
    }

    #[test]
    fn renders_fields() {
        let out = render_snapshot("<p>{{ WelcomeMsg }}|{{ Time }}|{{ HostIP }}</p>", &snapshot());
        let Ok(out) = out else {
            panic!("render failed");
        };
        assert_eq!(
            out,
            "<p>Not Welcome - Develop Server|12:00:00|172.16.0.1</p>"
        );
    }

    #[test]
    fn escapes_html() {
        let mut snap = snapshot();
        snap.welcome_message = "<b>hi & bye".to_string();
        let Ok(out) = render_snapshot("{{ WelcomeMsg }}", &snap) else {
            panic!("render failed");
        };
        assert_eq!(out, "&lt;b&gt;hi &amp; bye");
    }

    #[test]
    fn syntax_error_is_template_error() {
        assert!(matches!(
            render_snapshot("{{ WelcomeMsg ", &snapshot()),
            Err(DiagError::Template(_))
        ));
    }

    #[tokio::test]
    async fn missing_file_is_template_error() {
        let result =
            render_template_file(Path::new("/nonexistent/devprobe/index.html"), &snapshot()).await;
        assert!(matches!(result, Err(DiagError::Template(_))));
    }
}
