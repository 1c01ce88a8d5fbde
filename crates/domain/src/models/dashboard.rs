//! Admin dashboard summary models.

use serde::Serialize;

/// Aggregate counts shown on the admin dashboard overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: i64,
    pub total_services: i64,
    pub total_contacts: i64,
    pub new_contacts: i64,
    pub total_page_views: i64,
}
