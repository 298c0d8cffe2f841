//! Project catalog endpoints.

use axum::Json;
use axum::extract::{Path, State};

use crate::catalog::Project;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/projects`
///
/// Returns the whole catalog in display order.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.catalog.list_projects().to_vec())
}

/// `GET /api/projects/{slug}`
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    state
        .catalog
        .get_project(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}
