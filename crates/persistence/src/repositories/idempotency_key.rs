//! Idempotency key repository for database operations.
//!
//! Backs the duplicate-submit guard on the public contact form: a replayed
//! key returns the cached first response instead of inserting twice.

use sqlx::PgPool;

use crate::entities::IdempotencyKeyEntity;

const KEY_COLUMNS: &str = "id, key_hash, response_body, response_status, created_at, expires_at";

/// Repository for idempotency key database operations.
#[derive(Clone)]
pub struct IdempotencyKeyRepository {
    pool: PgPool,
}

impl IdempotencyKeyRepository {
    /// Creates a new IdempotencyKeyRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a non-expired key by its hash.
    pub async fn find_by_hash(
        &self,
        key_hash: &str,
    ) -> Result<Option<IdempotencyKeyEntity>, sqlx::Error> {
        sqlx::query_as::<_, IdempotencyKeyEntity>(&format!(
            "SELECT {} FROM idempotency_keys WHERE key_hash = $1 AND expires_at > NOW()",
            KEY_COLUMNS
        ))
        .bind(key_hash)
        .fetch_optional(&self.pool)
        .await
    }

    /// Store a key with its cached response. ON CONFLICT keeps the first
    /// writer's response under concurrent replays.
    pub async fn store(
        &self,
        key_hash: &str,
        response_body: serde_json::Value,
        response_status: i16,
    ) -> Result<IdempotencyKeyEntity, sqlx::Error> {
        sqlx::query_as::<_, IdempotencyKeyEntity>(&format!(
            r#"
            INSERT INTO idempotency_keys (key_hash, response_body, response_status)
            VALUES ($1, $2, $3)
            ON CONFLICT (key_hash) DO UPDATE SET
                key_hash = idempotency_keys.key_hash
            RETURNING {}
            "#,
            KEY_COLUMNS
        ))
        .bind(key_hash)
        .bind(response_body)
        .bind(response_status)
        .fetch_one(&self.pool)
        .await
    }

    /// Delete expired keys. Returns the number of deleted records.
    pub async fn delete_expired(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM idempotency_keys WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
