//! Analytics repository for the admin dashboard summary.

use domain::models::DashboardStats;
use sqlx::PgPool;

use crate::metrics::QueryTimer;

/// Aggregate row for the dashboard query.
#[derive(Debug, sqlx::FromRow)]
struct DashboardRow {
    total_projects: i64,
    total_services: i64,
    total_contacts: i64,
    new_contacts: i64,
    total_page_views: i64,
}

/// Repository for dashboard aggregate queries.
#[derive(Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    /// Creates a new AnalyticsRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Collect the counts shown on the dashboard overview in one round trip.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_stats");
        let row = sqlx::query_as::<_, DashboardRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM portfolio_projects) AS total_projects,
                (SELECT COUNT(*) FROM services) AS total_services,
                (SELECT COUNT(*) FROM contact_submissions) AS total_contacts,
                (SELECT COUNT(*) FROM contact_submissions WHERE status = 'new') AS new_contacts,
                (SELECT COUNT(*) FROM page_views) AS total_page_views
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();

        let row = row?;
        Ok(DashboardStats {
            total_projects: row.total_projects,
            total_services: row.total_services,
            total_contacts: row.total_contacts,
            new_contacts: row.new_contacts,
            total_page_views: row.total_page_views,
        })
    }
}
