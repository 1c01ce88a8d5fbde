//! Portfolio project entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the portfolio_projects table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub process_description: Option<String>,
    pub process_highlights: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
