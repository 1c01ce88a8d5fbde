//! Service offering domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A service offering shown on the services page, ordered by `display_order`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon reference resolved by the presentation layer.
    pub icon: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating or updating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Icon is required"))]
    pub icon: String,

    #[validate(range(min = 0, message = "Display order must be non-negative"))]
    #[serde(default)]
    pub display_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ServicePayload {
        ServicePayload {
            title: "Web Development".to_string(),
            description: "Responsive websites for small businesses".to_string(),
            icon: "globe".to_string(),
            display_order: 1,
        }
    }

    #[test]
    fn test_payload_valid() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_payload_missing_icon_rejected() {
        let mut p = payload();
        p.icon = String::new();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_payload_negative_order_rejected() {
        let mut p = payload();
        p.display_order = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_payload_display_order_defaults_to_zero() {
        let p: ServicePayload = serde_json::from_str(
            r#"{"title":"Branding","description":"Logos and identity","icon":"pen"}"#,
        )
        .unwrap();
        assert_eq!(p.display_order, 0);
    }
}
