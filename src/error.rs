//! Request error types with HTTP status code mapping.
//!
//! [`DiagError`] is the central error type for handlers. Client mistakes
//! map to `400 Bad Request` with a short plain-text body; server-side
//! failures map to `500` and keep their details in the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::DurationError;

/// Body sent with every `500` response.
pub const INTERNAL_ERROR_BODY: &str = "internal server error";

/// Handler error enum with HTTP status code mapping.
///
/// | Variant             | HTTP Status               |
/// |---------------------|---------------------------|
/// | `InvalidStatusCode` | 400 Bad Request           |
/// | `InvalidDuration`   | 400 Bad Request           |
/// | `DurationTooLong`   | 400 Bad Request           |
/// | `Template`          | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum DiagError {
    /// Status path segment is not an integer with a known reason phrase.
    #[error("invalid status code")]
    InvalidStatusCode,

    /// Exec-time path segment could not be parsed.
    #[error("invalid duration")]
    InvalidDuration(#[source] DurationError),

    /// Requested exec time exceeds the allowed maximum.
    #[error("execution time must under {max_secs} second")]
    DurationTooLong {
        /// Maximum accepted duration in whole seconds.
        max_secs: u64,
    },

    /// HTML template could not be loaded or rendered.
    #[error("template error: {0}")]
    Template(String),
}

impl DiagError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidStatusCode | Self::InvalidDuration(_) | Self::DurationTooLong { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DurationError> for DiagError {
    fn from(err: DurationError) -> Self {
        Self::InvalidDuration(err)
    }
}

impl From<minijinja::Error> for DiagError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

impl IntoResponse for DiagError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            (status, INTERNAL_ERROR_BODY).into_response()
        } else {
            tracing::debug!(error = %self, "rejected request");
            (status, self.to_string()).into_response()
        }
    }
}
