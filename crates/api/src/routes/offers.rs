//! Offer endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::{Offer, OfferPayload};
use persistence::repositories::OfferRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Response for offer listing.
#[derive(Debug, Serialize)]
pub struct OfferListResponse {
    pub offers: Vec<Offer>,
}

/// Active offers for the public site, newest first.
///
/// GET /api/v1/offers/active
pub async fn list_active_offers(
    State(state): State<AppState>,
) -> Result<Json<OfferListResponse>, ApiError> {
    let offers = OfferRepository::new(state.pool.clone()).list_active().await?;
    Ok(Json(OfferListResponse { offers }))
}

/// List all offers, newest first (admin view).
///
/// GET /api/v1/admin/offers
pub async fn list_offers(
    State(state): State<AppState>,
) -> Result<Json<OfferListResponse>, ApiError> {
    let offers = OfferRepository::new(state.pool.clone()).list().await?;
    Ok(Json(OfferListResponse { offers }))
}

/// Create an offer from a validated form payload.
///
/// POST /api/v1/admin/offers
pub async fn create_offer(
    State(state): State<AppState>,
    Json(payload): Json<OfferPayload>,
) -> Result<(StatusCode, Json<Offer>), ApiError> {
    payload.validate()?;

    let offer = OfferRepository::new(state.pool.clone())
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// Update the addressed offer.
///
/// PUT /api/v1/admin/offers/:id
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OfferPayload>,
) -> Result<Json<Offer>, ApiError> {
    payload.validate()?;

    OfferRepository::new(state.pool.clone())
        .update(id, &payload)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Offer not found".to_string()))
}

/// Delete the addressed offer.
///
/// DELETE /api/v1/admin/offers/:id
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = OfferRepository::new(state.pool.clone()).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Offer not found".to_string()))
    }
}
