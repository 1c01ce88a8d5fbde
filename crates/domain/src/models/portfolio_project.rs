//! Portfolio project domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Category a portfolio project is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Websites,
    Software,
    #[serde(rename = "Mobile Apps")]
    MobileApps,
    Branding,
}

impl ProjectCategory {
    /// Database / display representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Websites => "Websites",
            ProjectCategory::Software => "Software",
            ProjectCategory::MobileApps => "Mobile Apps",
            ProjectCategory::Branding => "Branding",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Websites" => Ok(ProjectCategory::Websites),
            "Software" => Ok(ProjectCategory::Software),
            "Mobile Apps" => Ok(ProjectCategory::MobileApps),
            "Branding" => Ok(ProjectCategory::Branding),
            other => Err(format!("Unknown project category: {}", other)),
        }
    }
}

/// A published portfolio project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_highlights: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating or updating a project.
///
/// List fields arrive as a single comma-separated string, the way the edit
/// form presents them, and are split on submit.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub category: ProjectCategory,

    /// Comma-separated technology list, e.g. "React, Node.js, MongoDB".
    #[validate(custom(function = "shared::validation::validate_comma_list"))]
    pub technologies: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub process_description: Option<String>,

    /// Comma-separated highlight list for the process section.
    #[serde(default)]
    pub process_highlights: Option<String>,
}

impl ProjectPayload {
    /// The technologies input split into its stored list form.
    pub fn technologies_list(&self) -> Vec<String> {
        split_comma_list(&self.technologies)
    }

    /// The highlights input split into its stored list form, if present and
    /// non-empty.
    pub fn process_highlights_list(&self) -> Option<Vec<String>> {
        self.process_highlights
            .as_deref()
            .map(split_comma_list)
            .filter(|list| !list.is_empty())
    }
}

/// Splits a comma-separated input into trimmed, non-empty elements.
///
/// Embedded commas cannot be escaped; a value containing one splits into two
/// elements.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins a stored list back into the single editable string shown in forms.
pub fn join_comma_list(items: &[String]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProjectPayload {
        ProjectPayload {
            title: "Restaurant POS".to_string(),
            description: "Complete POS system with inventory tracking".to_string(),
            category: ProjectCategory::Software,
            technologies: "React, Node.js".to_string(),
            image_url: None,
            live_url: Some("https://example.com".to_string()),
            process_description: None,
            process_highlights: None,
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in [
            ProjectCategory::Websites,
            ProjectCategory::Software,
            ProjectCategory::MobileApps,
            ProjectCategory::Branding,
        ] {
            let parsed: ProjectCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_unknown_value() {
        assert!("Consulting".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn test_category_serde_uses_display_names() {
        let json = serde_json::to_string(&ProjectCategory::MobileApps).unwrap();
        assert_eq!(json, "\"Mobile Apps\"");
        let parsed: ProjectCategory = serde_json::from_str("\"Mobile Apps\"").unwrap();
        assert_eq!(parsed, ProjectCategory::MobileApps);
    }

    #[test]
    fn test_split_comma_list_basic() {
        assert_eq!(
            split_comma_list("React, Node.js"),
            vec!["React".to_string(), "Node.js".to_string()]
        );
    }

    #[test]
    fn test_split_comma_list_drops_empty_elements() {
        assert_eq!(
            split_comma_list("React, , Node.js,"),
            vec!["React".to_string(), "Node.js".to_string()]
        );
        assert!(split_comma_list(" , ,").is_empty());
    }

    #[test]
    fn test_join_comma_list() {
        let list = vec!["React".to_string(), "Node.js".to_string()];
        assert_eq!(join_comma_list(&list), "React, Node.js");
    }

    #[test]
    fn test_split_join_round_trip() {
        let input = "React, Node.js";
        assert_eq!(join_comma_list(&split_comma_list(input)), input);
    }

    #[test]
    fn test_payload_valid() {
        assert!(payload().validate().is_ok());
        assert_eq!(payload().technologies_list(), vec!["React", "Node.js"]);
    }

    #[test]
    fn test_payload_empty_title_rejected() {
        let mut p = payload();
        p.title = String::new();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_payload_blank_technologies_rejected() {
        let mut p = payload();
        p.technologies = " , ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_payload_highlights_list() {
        let mut p = payload();
        p.process_highlights = Some("Discovery, Build, Launch".to_string());
        assert_eq!(
            p.process_highlights_list(),
            Some(vec![
                "Discovery".to_string(),
                "Build".to_string(),
                "Launch".to_string()
            ])
        );

        p.process_highlights = Some(" , ".to_string());
        assert_eq!(p.process_highlights_list(), None);
    }
}
