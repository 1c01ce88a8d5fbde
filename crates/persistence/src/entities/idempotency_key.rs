//! Idempotency key entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the idempotency_keys table.
#[derive(Debug, Clone, FromRow)]
pub struct IdempotencyKeyEntity {
    pub id: Uuid,
    pub key_hash: String,
    pub response_body: serde_json::Value,
    pub response_status: i16,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
