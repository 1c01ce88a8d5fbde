//! Admin dashboard summary handler.

use axum::{extract::State, Json};

use domain::models::DashboardStats;
use persistence::repositories::AnalyticsRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Aggregate counts for the dashboard overview.
///
/// GET /api/v1/admin/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = AnalyticsRepository::new(state.pool.clone())
        .dashboard_stats()
        .await?;
    Ok(Json(stats))
}
