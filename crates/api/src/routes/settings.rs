//! Site settings handlers.
//!
//! Settings live in process-local state only: they are read and replaced
//! under a lock and reset to defaults when the process restarts.

use axum::{extract::State, Json};
use validator::Validate;

use domain::models::SiteSettings;

use crate::app::AppState;
use crate::error::ApiError;

/// Current site settings.
///
/// GET /api/v1/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<SiteSettings> {
    let settings = state.settings.read().unwrap().clone();
    Json(settings)
}

/// Replace the site settings wholesale.
///
/// PUT /api/v1/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(new_settings): Json<SiteSettings>,
) -> Result<Json<SiteSettings>, ApiError> {
    new_settings.validate()?;

    *state.settings.write().unwrap() = new_settings.clone();

    Ok(Json(new_settings))
}
