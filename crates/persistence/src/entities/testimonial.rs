//! Testimonial entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the testimonials table.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialEntity {
    pub id: Uuid,
    pub client_name: String,
    pub company: String,
    pub rating: i32,
    pub testimonial_text: String,
    pub avatar_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}
