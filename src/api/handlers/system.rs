//! System endpoints: the OpenAPI description of the diagnostic surface.

use axum::Router;
use utoipa::OpenApi;

use super::{diagnostic, info};
use crate::app_state::AppState;
use crate::domain::InfoSnapshot;

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document covering every HTTP route.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "devprobe-server",
        description = "Diagnostic HTTP server for exercising clients, proxies and load balancers."
    ),
    paths(
        info::text_handler,
        info::json_handler,
        info::html_handler,
        diagnostic::status_handler,
        diagnostic::exectime_handler,
        diagnostic::redirect_handler,
    ),
    components(schemas(InfoSnapshot)),
    tags(
        (name = "Info", description = "Server information snapshots"),
        (name = "Diagnostics", description = "Status codes, latency and redirects"),
    )
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json` — The OpenAPI document.
#[cfg(not(feature = "swagger-ui"))]
pub async fn openapi_handler() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// System routes. With the `swagger-ui` feature the document is served by
/// Swagger UI, which also mounts the interactive viewer at `/swagger-ui`.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()),
    )
}

/// System routes.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, axum::routing::get(openapi_handler))
}
