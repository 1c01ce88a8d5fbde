//! Service offering endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::{Service, ServicePayload};
use persistence::repositories::ServiceRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Response for service listing.
#[derive(Debug, Serialize)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
}

/// List all services in display order.
///
/// GET /api/v1/services
/// GET /api/v1/admin/services
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<ServiceListResponse>, ApiError> {
    let services = ServiceRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ServiceListResponse { services }))
}

/// Create a service from a validated form payload.
///
/// POST /api/v1/admin/services
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    payload.validate()?;

    let service = ServiceRepository::new(state.pool.clone())
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(service)))
}

/// Update the addressed service.
///
/// PUT /api/v1/admin/services/:id
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServicePayload>,
) -> Result<Json<Service>, ApiError> {
    payload.validate()?;

    ServiceRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))
}

/// Delete the addressed service.
///
/// DELETE /api/v1/admin/services/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = ServiceRepository::new(state.pool.clone()).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Service not found".to_string()))
    }
}
