//! Testimonial endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::{Testimonial, TestimonialPayload};
use persistence::repositories::TestimonialRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Response for testimonial listing.
#[derive(Debug, Serialize)]
pub struct TestimonialListResponse {
    pub testimonials: Vec<Testimonial>,
}

/// Featured testimonials for the public site: featured first, then by
/// recency, capped by configuration.
///
/// GET /api/v1/testimonials/featured
pub async fn list_featured_testimonials(
    State(state): State<AppState>,
) -> Result<Json<TestimonialListResponse>, ApiError> {
    let testimonials = TestimonialRepository::new(state.pool.clone())
        .list_featured(state.config.limits.featured_testimonials)
        .await?;
    Ok(Json(TestimonialListResponse { testimonials }))
}

/// List all testimonials, newest first (admin view).
///
/// GET /api/v1/admin/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<TestimonialListResponse>, ApiError> {
    let testimonials = TestimonialRepository::new(state.pool.clone()).list().await?;
    Ok(Json(TestimonialListResponse { testimonials }))
}

/// Create a testimonial from a validated form payload.
///
/// POST /api/v1/admin/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(payload): Json<TestimonialPayload>,
) -> Result<(StatusCode, Json<Testimonial>), ApiError> {
    payload.validate()?;

    let testimonial = TestimonialRepository::new(state.pool.clone())
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// Update the addressed testimonial.
///
/// PUT /api/v1/admin/testimonials/:id
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TestimonialPayload>,
) -> Result<Json<Testimonial>, ApiError> {
    payload.validate()?;

    TestimonialRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Testimonial not found".to_string()))
}

/// Delete the addressed testimonial.
///
/// DELETE /api/v1/admin/testimonials/:id
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = TestimonialRepository::new(state.pool.clone())
        .delete(id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Testimonial not found".to_string()))
    }
}
