//! Page view tracking models.
//!
//! Page views are write-only: the application records them and the dashboard
//! only ever reads the count.

use serde::Deserialize;
use validator::Validate;

/// Payload sent by the site on every navigation event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackPageViewRequest {
    #[validate(length(min = 1, max = 2048, message = "Page path is required"))]
    pub page_path: String,

    #[serde(default)]
    pub user_agent: Option<String>,
}
