//! Repository-related data models.

use serde::{Deserialize, Serialize};

/// A repository as listed by the organisation repositories endpoint.
///
/// Only the fields the showcase needs are decoded; everything else in the
/// API payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Numeric repository identifier
    #[serde(default)]
    pub id: Option<u64>,
    /// Repository name, unique within the organisation
    pub name: String,
    /// Repository description
    pub description: Option<String>,
    /// Number of stars
    #[serde(rename = "stargazers_count")]
    pub star_count: u64,
    /// External link to the repository page
    #[serde(rename = "html_url")]
    pub url: String,
}

impl RepositoryRecord {
    /// Build a record with only the fields the pipeline looks at.
    pub fn new(name: &str, star_count: u64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            description: None,
            star_count,
            url: format!("https://github.com/ds-horizon/{name}"),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
