//! Portfolio project endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::{PortfolioProject, ProjectPayload};
use persistence::repositories::ProjectRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Response for project listing.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<PortfolioProject>,
}

/// List all projects, newest first.
///
/// GET /api/v1/projects
/// GET /api/v1/admin/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let projects = ProjectRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// Create a project from a validated form payload.
///
/// POST /api/v1/admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<PortfolioProject>), ApiError> {
    payload.validate()?;

    let project = ProjectRepository::new(state.pool.clone())
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Update the addressed project.
///
/// PUT /api/v1/admin/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<PortfolioProject>, ApiError> {
    payload.validate()?;

    ProjectRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}

/// Delete the addressed project.
///
/// DELETE /api/v1/admin/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = ProjectRepository::new(state.pool.clone()).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Project not found".to_string()))
    }
}
