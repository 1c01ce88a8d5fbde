//! Page view tracking handler.
//!
//! Fire-and-forget analytics capture: the write happens off the request
//! task and every outcome short of a malformed request answers 202. A lost
//! page view must never surface to the visitor.

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use validator::Validate;

use domain::models::TrackPageViewRequest;
use persistence::repositories::PageViewRepository;

use crate::app::AppState;

/// Record a navigation event.
///
/// POST /api/v1/page-views
pub async fn track_page_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<TrackPageViewRequest>,
) -> StatusCode {
    if let Err(e) = request.validate() {
        tracing::debug!("Discarding malformed page view: {}", e);
        return StatusCode::ACCEPTED;
    }

    // Body value wins; the header is a fallback for thin clients.
    let user_agent = request.user_agent.clone().or_else(|| {
        headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    });

    let repo = PageViewRepository::new(state.pool.clone());
    tokio::spawn(async move {
        if let Err(e) = repo
            .insert(&request.page_path, user_agent.as_deref())
            .await
        {
            tracing::warn!("Failed to record page view: {}", e);
        }
    });

    StatusCode::ACCEPTED
}
