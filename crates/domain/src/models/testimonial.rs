//! Client testimonial domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A client testimonial. Featured entries sort before the rest on the
/// public site.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub company: String,
    pub rating: i32,
    pub testimonial_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating or updating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    #[validate(length(min = 1, max = 100, message = "Client name is required"))]
    pub client_name: String,

    #[validate(length(min = 1, max = 100, message = "Company is required"))]
    pub company: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[serde(default = "default_rating")]
    pub rating: i32,

    #[validate(length(min = 1, message = "Testimonial text is required"))]
    pub testimonial_text: String,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,
}

fn default_rating() -> i32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TestimonialPayload {
        TestimonialPayload {
            client_name: "Amina O.".to_string(),
            company: "Savanna Foods".to_string(),
            rating: 5,
            testimonial_text: "Delivered ahead of schedule".to_string(),
            avatar_url: None,
            is_featured: false,
        }
    }

    #[test]
    fn test_payload_valid() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut p = payload();
        p.rating = 0;
        assert!(p.validate().is_err());
        p.rating = 6;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_defaults_from_minimal_json() {
        let p: TestimonialPayload = serde_json::from_str(
            r#"{"clientName":"Amina","company":"Savanna","testimonialText":"Great work there"}"#,
        )
        .unwrap();
        assert_eq!(p.rating, 5);
        assert!(!p.is_featured);
        assert!(p.avatar_url.is_none());
    }
}
