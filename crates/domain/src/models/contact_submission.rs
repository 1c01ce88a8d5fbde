//! Contact form submission domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Submission lifecycle status. The only permitted transition is new -> read;
/// submissions are never deleted through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Read,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Read => "read",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(SubmissionStatus::New),
            "read" => Ok(SubmissionStatus::Read),
            other => Err(format!("Unknown submission status: {}", other)),
        }
    }
}

/// A stored visitor inquiry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

/// The public contact form payload.
///
/// Validation runs before any database call; the first violated constraint
/// is reported and nothing is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormRequest {
    #[validate(custom(function = "shared::validation::validate_contact_name"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_email_address"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(custom(function = "shared::validation::validate_contact_message"))]
    pub message: String,
}

impl ContactFormRequest {
    /// Trimmed field values as they are stored. An empty phone collapses to
    /// None, matching how the form treats the optional field.
    pub fn normalized(&self) -> (String, String, Option<String>, String) {
        let phone = self
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        (
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            phone,
            self.message.trim().to_string(),
        )
    }
}
