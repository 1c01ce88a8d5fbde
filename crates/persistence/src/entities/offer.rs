//! Offer entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the offers table.
#[derive(Debug, Clone, FromRow)]
pub struct OfferEntity {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub price: String,
    pub badge_text: String,
    pub button_text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
