//! API route definitions.

mod contact;
mod diagnostics;
mod projects;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;

pub use self::contact::ContactAck;
pub use self::diagnostics::DiagnosticsReport;

/// Build the complete API router.
///
/// # Routes
///
/// - `GET /` - Greeting
/// - `GET /api/projects` - All projects
/// - `GET /api/projects/{slug}` - One project by slug
/// - `POST /api/contact` - Store a contact form submission
/// - `GET /test` - Database diagnostics
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{slug}", get(projects::get_project))
        .route("/api/contact", post(contact::submit_contact))
        .route("/test", get(diagnostics::test_database))
        .with_state(state)
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Portfolio API running",
    })
}

/// Cross-origin policy for the public site.
///
/// Any origin, method and header is allowed with credentials. Wildcards
/// cannot be combined with credentials, so the request values are mirrored.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
