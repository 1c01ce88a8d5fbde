//! Site settings held in process-local state.
//!
//! Settings are not persisted: they live in the application state for the
//! lifetime of the process and reset to defaults on restart.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// General site information edited from the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[validate(length(min = 1, max = 100, message = "Site name is required"))]
    pub site_name: String,

    #[validate(length(min = 1, max = 200, message = "Tagline is required"))]
    pub tagline: String,

    #[validate(custom(function = "shared::validation::validate_email_address"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(length(min = 1, max = 300, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, max = 2000, message = "About text is required"))]
    pub about_text: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Tech Agency".to_string(),
            tagline: "Building Digital Excellence".to_string(),
            email: "contact@techagency.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Tech Street, Digital City, DC 12345".to_string(),
            about_text: "We are a leading tech agency specializing in web development, \
                         mobile apps, and digital solutions."
                .to_string(),
        }
    }
}
