//! Diagnostic endpoints: arbitrary status codes, artificial latency and a
//! fixed redirect.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;

use crate::app_state::AppState;
use crate::domain::ExecDuration;
use crate::error::DiagError;

/// Upper bound for `/exectime/{duration}`, in seconds.
pub const MAX_EXEC_SECS: u64 = 120;

/// Upper bound for `/exectime/{duration}`.
pub const MAX_EXEC_TIME: ExecDuration = ExecDuration::from_secs(MAX_EXEC_SECS as i64);

/// `Location` of the `/redirect` response.
pub const REDIRECT_TARGET: &str = "https://www.example.com";

/// Parses a status path segment into a code with a standard reason phrase.
///
/// # Errors
///
/// Returns [`DiagError::InvalidStatusCode`] if `raw` is not an integer or
/// names a code without a reason phrase.
pub fn parse_status(raw: &str) -> Result<StatusCode, DiagError> {
    let code: i64 = raw.parse().map_err(|_| DiagError::InvalidStatusCode)?;
    let code = u16::try_from(code).map_err(|_| DiagError::InvalidStatusCode)?;
    let status = StatusCode::from_u16(code).map_err(|_| DiagError::InvalidStatusCode)?;
    match status.canonical_reason() {
        Some(reason) if !reason.is_empty() => Ok(status),
        _ => Err(DiagError::InvalidStatusCode),
    }
}

/// Parses an exec-time path segment and enforces [`MAX_EXEC_TIME`].
///
/// # Errors
///
/// Returns [`DiagError::InvalidDuration`] if `raw` is not a duration and
/// [`DiagError::DurationTooLong`] if it exceeds the maximum.
pub fn parse_exec_time(raw: &str) -> Result<ExecDuration, DiagError> {
    let duration: ExecDuration = raw.parse()?;
    if duration > MAX_EXEC_TIME {
        return Err(DiagError::DurationTooLong {
            max_secs: MAX_EXEC_SECS,
        });
    }
    Ok(duration)
}

/// `GET /status/{code}` — Respond with the requested status code.
///
/// # Errors
///
/// Returns [`DiagError::InvalidStatusCode`] for unknown codes.
#[utoipa::path(
    get,
    path = "/status/{code}",
    tag = "Diagnostics",
    summary = "Arbitrary status code",
    description = "Responds with the given status and `<code> <reason>` as body.",
    params(
        ("code" = String, Path, description = "HTTP status code, e.g. `503`"),
    ),
    responses(
        (status = 200, description = "Requested status (any code with a reason phrase)", body = String),
        (status = 400, description = "Not an integer or no reason phrase", body = String),
    )
)]
pub async fn status_handler(Path(code): Path<String>) -> Result<impl IntoResponse, DiagError> {
    let status = parse_status(&code)?;
    let reason = status.canonical_reason().unwrap_or_default();
    Ok((status, format!("{} {reason}", status.as_u16())))
}

/// `GET /exectime/{duration}` — Wait, then respond.
///
/// The sleep parks only this request's task.
///
/// # Errors
///
/// Returns [`DiagError::InvalidDuration`] or [`DiagError::DurationTooLong`]
/// before sleeping.
#[utoipa::path(
    get,
    path = "/exectime/{duration}",
    tag = "Diagnostics",
    summary = "Simulated latency",
    description = "Sleeps for the given duration (at most 120s) before answering.",
    params(
        ("duration" = String, Path, description = "Duration such as `5s`, `200ms`, `1m30s`"),
    ),
    responses(
        (status = 200, description = "Slept for the duration", body = String),
        (status = 400, description = "Unparseable or longer than 120s", body = String),
    )
)]
pub async fn exectime_handler(Path(raw): Path<String>) -> Result<String, DiagError> {
    let duration = parse_exec_time(&raw)?;
    tracing::debug!(%duration, "sleeping");
    tokio::time::sleep(duration.as_std()).await;
    Ok(format!("got duration {duration}"))
}

/// `GET /redirect` — `302 Found` to [`REDIRECT_TARGET`].
#[utoipa::path(
    get,
    path = "/redirect",
    tag = "Diagnostics",
    summary = "Fixed redirect",
    responses(
        (status = 302, description = "Redirect to https://www.example.com"),
    )
)]
pub async fn redirect_handler() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, REDIRECT_TARGET),
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
        ],
        format!("<a href=\"{REDIRECT_TARGET}\">Found</a>.\n"),
    )
}

/// Diagnostic routes. Every HTTP method is accepted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status/{code}", any(status_handler))
        .route("/exectime/{duration}", any(exectime_handler))
        .route("/redirect", any(redirect_handler))
}
