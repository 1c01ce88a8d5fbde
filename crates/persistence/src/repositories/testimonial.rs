//! Testimonial repository for database operations.

use domain::models::{Testimonial, TestimonialPayload};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TestimonialEntity;
use crate::metrics::QueryTimer;

const TESTIMONIAL_COLUMNS: &str =
    "id, client_name, company, rating, testimonial_text, avatar_url, is_featured, created_at";

/// Repository for testimonial database operations.
#[derive(Clone)]
pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    /// Creates a new TestimonialRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all testimonials, newest first (admin view).
    pub async fn list(&self) -> Result<Vec<Testimonial>, sqlx::Error> {
        let timer = QueryTimer::new("list_testimonials");
        let result = sqlx::query_as::<_, TestimonialEntity>(&format!(
            "SELECT {} FROM testimonials ORDER BY created_at DESC",
            TESTIMONIAL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// List testimonials for the public site: featured first, then by
    /// recency, capped at `limit`.
    pub async fn list_featured(&self, limit: i64) -> Result<Vec<Testimonial>, sqlx::Error> {
        let timer = QueryTimer::new("list_featured_testimonials");
        let result = sqlx::query_as::<_, TestimonialEntity>(&format!(
            r#"
            SELECT {}
            FROM testimonials
            ORDER BY is_featured DESC, created_at DESC
            LIMIT $1
            "#,
            TESTIMONIAL_COLUMNS
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// Insert a new testimonial from a validated payload.
    pub async fn create(&self, payload: &TestimonialPayload) -> Result<Testimonial, sqlx::Error> {
        let timer = QueryTimer::new("create_testimonial");
        let result = sqlx::query_as::<_, TestimonialEntity>(&format!(
            r#"
            INSERT INTO testimonials
                (client_name, company, rating, testimonial_text, avatar_url, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            TESTIMONIAL_COLUMNS
        ))
        .bind(&payload.client_name)
        .bind(&payload.company)
        .bind(payload.rating)
        .bind(&payload.testimonial_text)
        .bind(blank_to_none(payload.avatar_url.as_deref()))
        .bind(payload.is_featured)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        result.map(to_model)
    }

    /// Update the testimonial with the given id. Returns None if it no
    /// longer exists.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &TestimonialPayload,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let timer = QueryTimer::new("update_testimonial");
        let result = sqlx::query_as::<_, TestimonialEntity>(&format!(
            r#"
            UPDATE testimonials
            SET client_name = $2, company = $3, rating = $4, testimonial_text = $5,
                avatar_url = $6, is_featured = $7
            WHERE id = $1
            RETURNING {}
            "#,
            TESTIMONIAL_COLUMNS
        ))
        .bind(id)
        .bind(&payload.client_name)
        .bind(&payload.company)
        .bind(payload.rating)
        .bind(&payload.testimonial_text)
        .bind(blank_to_none(payload.avatar_url.as_deref()))
        .bind(payload.is_featured)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?.map(to_model))
    }

    /// Delete the testimonial with the given id.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_testimonial");
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result?.rows_affected() > 0)
    }
}

fn to_model(e: TestimonialEntity) -> Testimonial {
    Testimonial {
        id: e.id,
        client_name: e.client_name,
        company: e.company,
        rating: e.rating,
        testimonial_text: e.testimonial_text,
        avatar_url: e.avatar_url,
        is_featured: e.is_featured,
        created_at: e.created_at,
    }
}

fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
