//! Contact submission entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the contact_submissions table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactSubmissionEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
