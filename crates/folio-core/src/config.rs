//! Runtime configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides:
//!
//! ```json
//! { "tip_duration_ms": 2000, "projects": { "my-app": "What it does." } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

/// How long a certificate tip stays up after the last click.
pub const DEFAULT_TIP_DURATION_MS: u64 = 1600;

/// Sections that behave like tabs, in page order.
pub const MANAGED_SECTION_IDS: [&str; 5] = ["about", "skills", "certificates", "projects", "contact"];

pub const DEFAULT_ACKNOWLEDGMENT: &str =
    "Thanks! Message captured locally - replace with your email handler.";

pub const DEFAULT_PROJECT_TITLE: &str = "Project Details";

pub const DEFAULT_LIGHTBOX_CAPTION: &str = "Certificate preview";

const USER_PROFILE_DESCRIPTION: &str = "The User Profile and Networking System is a full-stack web application developed to provide a structured platform where users can create, manage, and showcase their personal or professional profiles while establishing meaningful connections with other users. The application simulates the core functionality of modern networking platforms by focusing on user identity management, connectivity, and secure information exchange.";

const AGRO_MENTOR_DESCRIPTION: &str = "Agro Mentor is a web-based application designed to support farmers by providing reliable agricultural guidance through digital technology. The project aims to bridge the gap between farmers and expert knowledge by offering crop-related information, best farming practices, and decision-making support in an easy-to-use platform.";

/// Read-only map from project key to its description paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog(BTreeMap<String, String>);

impl ProjectCatalog {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, key: &str, description: &str) -> Self {
        self.0.insert(key.to_string(), description.to_string());
        self
    }

    /// Description for `key`. Empty descriptions count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|d| !d.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::new()
            .with("user-profile", USER_PROFILE_DESCRIPTION)
            .with("agro-mentor", AGRO_MENTOR_DESCRIPTION)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub tip_duration_ms: u64,
    pub managed_sections: Vec<String>,
    pub acknowledgment: String,
    pub default_project_title: String,
    pub default_lightbox_caption: String,
    pub projects: ProjectCatalog,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            tip_duration_ms: DEFAULT_TIP_DURATION_MS,
            managed_sections: MANAGED_SECTION_IDS.iter().map(|s| s.to_string()).collect(),
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
            default_project_title: DEFAULT_PROJECT_TITLE.to_string(),
            default_lightbox_caption: DEFAULT_LIGHTBOX_CAPTION.to_string(),
            projects: ProjectCatalog::default(),
        }
    }
}

impl FolioConfig {
    pub fn tip_duration(&self) -> Duration {
        Duration::from_millis(self.tip_duration_ms)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.tip_duration(), Duration::from_millis(1600));
        assert_eq!(
            config.managed_sections,
            ["about", "skills", "certificates", "projects", "contact"]
        );
        assert_eq!(config.projects.len(), 2);
        assert!(config
            .projects
            .get("agro-mentor")
            .unwrap()
            .starts_with("Agro Mentor is a web-based application"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FolioConfig::from_json(r#"{ "tip_duration_ms": 250 }"#).unwrap();
        assert_eq!(config.tip_duration_ms, 250);
        assert_eq!(config.default_project_title, "Project Details");
        assert_eq!(config.projects, ProjectCatalog::default());
    }

    #[test]
    fn test_projects_override_replaces_table() {
        let config = FolioConfig::from_json(r#"{ "projects": { "solo": "Just one." } }"#).unwrap();
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects.get("solo"), Some("Just one."));
        assert_eq!(config.projects.get("user-profile"), None);
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let catalog = ProjectCatalog::new().with("blank", "");
        assert_eq!(catalog.get("blank"), None);
    }

    #[test]
    fn test_malformed_json() {
        let err = FolioConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, FolioError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FolioConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
