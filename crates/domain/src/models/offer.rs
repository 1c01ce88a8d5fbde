//! Promotional offer domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A promotional offer. Only active offers appear on the public site.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Free-text price line, e.g. "Only KES 15,000". Never parsed as a number.
    pub price: String,
    pub badge_text: String,
    pub button_text: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating or updating an offer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfferPayload {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Subtitle is required"))]
    pub subtitle: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Price is required"))]
    pub price: String,

    #[validate(length(min = 1, max = 100, message = "Badge text is required"))]
    #[serde(default = "default_badge_text")]
    pub badge_text: String,

    #[validate(length(min = 1, max = 100, message = "Button text is required"))]
    #[serde(default = "default_button_text")]
    pub button_text: String,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_badge_text() -> String {
    "LIMITED OFFER".to_string()
}

fn default_button_text() -> String {
    "Claim This Offer".to_string()
}

fn default_is_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults() {
        let p: OfferPayload = serde_json::from_str(
            r#"{
                "title": "Complete Digital Package",
                "subtitle": "Website + branding",
                "description": "Everything a small business needs to launch",
                "price": "Only KES 15,000"
            }"#,
        )
        .unwrap();

        assert!(p.is_active);
        assert_eq!(p.badge_text, "LIMITED OFFER");
        assert_eq!(p.button_text, "Claim This Offer");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_payload_blank_price_rejected() {
        let p = OfferPayload {
            title: "Package".to_string(),
            subtitle: "Sub".to_string(),
            description: "Desc".to_string(),
            price: String::new(),
            badge_text: default_badge_text(),
            button_text: default_button_text(),
            is_active: true,
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_price_is_free_text() {
        let p: OfferPayload = serde_json::from_str(
            r#"{
                "title": "T",
                "subtitle": "S",
                "description": "D",
                "price": "From KES 9,999 / month"
            }"#,
        )
        .unwrap();
        assert_eq!(p.price, "From KES 9,999 / month");
    }
}
