//! Page view repository for database operations.
//!
//! Writes are best-effort: the tracking endpoint logs and swallows failures,
//! so this repository only reports errors to its caller.

use sqlx::PgPool;

use crate::metrics::QueryTimer;

/// Repository for page view database operations.
#[derive(Clone)]
pub struct PageViewRepository {
    pool: PgPool,
}

impl PageViewRepository {
    /// Creates a new PageViewRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a single page view.
    pub async fn insert(&self, page_path: &str, user_agent: Option<&str>) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("insert_page_view");
        let result = sqlx::query("INSERT INTO page_views (page_path, user_agent) VALUES ($1, $2)")
            .bind(page_path)
            .bind(user_agent)
            .execute(&self.pool)
            .await;
        timer.record();

        result.map(|_| ())
    }

    /// Total page views recorded.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_page_views");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM page_views")
            .fetch_one(&self.pool)
            .await;
        timer.record();

        result
    }
}
