//! Offer repository for database operations.

use domain::models::{Offer, OfferPayload};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::OfferEntity;
use crate::metrics::QueryTimer;

const OFFER_COLUMNS: &str =
    "id, title, subtitle, description, price, badge_text, button_text, is_active, created_at";

/// Repository for offer database operations.
#[derive(Clone)]
pub struct OfferRepository {
    pool: PgPool,
}

impl OfferRepository {
    /// Creates a new OfferRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all offers, newest first (admin view).
    pub async fn list(&self) -> Result<Vec<Offer>, sqlx::Error> {
        let timer = QueryTimer::new("list_offers");
        let result = sqlx::query_as::<_, OfferEntity>(&format!(
            "SELECT {} FROM offers ORDER BY created_at DESC",
            OFFER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// List active offers for the public site, newest first.
    pub async fn list_active(&self) -> Result<Vec<Offer>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_offers");
        let result = sqlx::query_as::<_, OfferEntity>(&format!(
            "SELECT {} FROM offers WHERE is_active = true ORDER BY created_at DESC",
            OFFER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// Insert a new offer from a validated payload.
    pub async fn create(&self, payload: &OfferPayload) -> Result<Offer, sqlx::Error> {
        let timer = QueryTimer::new("create_offer");
        let result = sqlx::query_as::<_, OfferEntity>(&format!(
            r#"
            INSERT INTO offers
                (title, subtitle, description, price, badge_text, button_text, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            OFFER_COLUMNS
        ))
        .bind(&payload.title)
        .bind(&payload.subtitle)
        .bind(&payload.description)
        .bind(&payload.price)
        .bind(&payload.badge_text)
        .bind(&payload.button_text)
        .bind(payload.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        result.map(to_model)
    }

    /// Update the offer with the given id. Returns None if it no longer
    /// exists.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &OfferPayload,
    ) -> Result<Option<Offer>, sqlx::Error> {
        let timer = QueryTimer::new("update_offer");
        let result = sqlx::query_as::<_, OfferEntity>(&format!(
            r#"
            UPDATE offers
            SET title = $2, subtitle = $3, description = $4, price = $5,
                badge_text = $6, button_text = $7, is_active = $8
            WHERE id = $1
            RETURNING {}
            "#,
            OFFER_COLUMNS
        ))
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.subtitle)
        .bind(&payload.description)
        .bind(&payload.price)
        .bind(&payload.badge_text)
        .bind(&payload.button_text)
        .bind(payload.is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?.map(to_model))
    }

    /// Delete the offer with the given id.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_offer");
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result?.rows_affected() > 0)
    }
}

fn to_model(e: OfferEntity) -> Offer {
    Offer {
        id: e.id,
        title: e.title,
        subtitle: e.subtitle,
        description: e.description,
        price: e.price,
        badge_text: e.badge_text,
        button_text: e.button_text,
        is_active: e.is_active,
        created_at: e.created_at,
    }
}
