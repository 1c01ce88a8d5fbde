//! Service entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the services table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}
