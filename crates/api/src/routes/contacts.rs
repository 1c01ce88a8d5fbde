//! Contact form intake and admin submission handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::{ContactFormRequest, ContactSubmission};
use persistence::repositories::{ContactSubmissionRepository, IdempotencyKeyRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::OptionalIdempotencyKey;
use crate::services::whatsapp::{self, WhatsAppDraft};

/// Response for submission listing.
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<ContactSubmission>,
}

/// Response carrying the composed WhatsApp link.
#[derive(Debug, Serialize)]
pub struct WhatsAppLinkResponse {
    pub url: String,
}

/// Accept a visitor inquiry.
///
/// Validation runs before any database call; the first violated constraint
/// aborts the request. A replayed `Idempotency-Key` returns the cached first
/// response instead of inserting a duplicate.
///
/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    OptionalIdempotencyKey(idempotency_key): OptionalIdempotencyKey,
    Json(request): Json<ContactFormRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    request.validate()?;

    let keys = IdempotencyKeyRepository::new(state.pool.clone());

    if let Some(ref key) = idempotency_key {
        if let Some(cached) = keys.find_by_hash(&key.hash).await? {
            let status = StatusCode::from_u16(cached.response_status as u16)
                .unwrap_or(StatusCode::CREATED);
            return Ok((status, Json(cached.response_body)));
        }
    }

    let (name, email, phone, message) = request.normalized();
    let submission = ContactSubmissionRepository::new(state.pool.clone())
        .insert(&name, &email, phone.as_deref(), &message)
        .await?;

    let body = serde_json::to_value(&submission)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize submission: {}", e)))?;

    if let Some(key) = idempotency_key {
        keys.store(&key.hash, body.clone(), StatusCode::CREATED.as_u16() as i16)
            .await?;
    }

    Ok((StatusCode::CREATED, Json(body)))
}

/// Compose the prefilled WhatsApp link for the current form draft.
/// Persists nothing.
///
/// POST /api/v1/contact/whatsapp-link
pub async fn whatsapp_link(
    State(state): State<AppState>,
    Json(draft): Json<WhatsAppDraft>,
) -> Result<Json<WhatsAppLinkResponse>, ApiError> {
    let number = state.config.contact.whatsapp_number.trim();
    if number.is_empty() {
        return Err(ApiError::ServiceUnavailable(
            "WhatsApp contact is not configured".to_string(),
        ));
    }

    let site_name = state.settings.read().unwrap().site_name.clone();

    Ok(Json(WhatsAppLinkResponse {
        url: whatsapp::compose_link(number, &site_name, &draft),
    }))
}

/// List all submissions, newest first.
///
/// GET /api/v1/admin/contacts
pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<SubmissionListResponse>, ApiError> {
    let submissions = ContactSubmissionRepository::new(state.pool.clone())
        .list()
        .await?;
    Ok(Json(SubmissionListResponse { submissions }))
}

/// Transition a submission from "new" to "read". Repeat calls are no-ops.
///
/// POST /api/v1/admin/contacts/:id/read
pub async fn mark_submission_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactSubmission>, ApiError> {
    ContactSubmissionRepository::new(state.pool.clone())
        .mark_read(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Submission not found".to_string()))
}
