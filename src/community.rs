//! Community section: meetups and social links.
//!
//! The content lives in an optional site data file. The same file may also
//! override the featured allow-list.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::pipeline::AllowList;

/// Call-to-action link at the bottom of the section.
pub const CONTRIBUTE_URL: &str = "https://github.com/orgs/ds-horizon/";

/// Highlight stats shown on the first social links, in order.
pub const SOCIAL_STATS: [&str; 2] = ["3.2K stars", "5K followers"];

/// A past or upcoming meetup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meetup {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub location: String,
    pub attendees: String,
    pub image_src: String,
    pub link: String,
}

/// A social media or code hosting link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: u32,
    pub label: String,
    pub href: String,
    pub icon: String,
}

/// Static site content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    /// Replaces the built-in featured list when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<Vec<String>>,
    #[serde(default)]
    pub meetups: Vec<Meetup>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl SiteData {
    /// Content used when no data file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            featured: None,
            meetups: Vec::new(),
            social_links: vec![
                SocialLink {
                    id: 1,
                    label: "GitHub".to_string(),
                    href: "https://github.com/ds-horizon".to_string(),
                    icon: "Github".to_string(),
                },
                SocialLink {
                    id: 2,
                    label: "DreamSportsLabs".to_string(),
                    href: "https://github.com/dreamsportslabs".to_string(),
                    icon: "Github".to_string(),
                },
            ],
        }
    }

    /// Read site data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Serialization`] if it is not valid site data.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            meetups = data.meetups.len(),
            social_links = data.social_links.len(),
            "loaded site data"
        );
        Ok(data)
    }

    /// Load from `path` if given, otherwise the built-in content.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, Error> {
        path.map_or_else(|| Ok(Self::builtin()), Self::load)
    }

    /// Featured allow-list: the file's list if it has one, else the built-in.
    #[must_use]
    pub fn allow_list(&self) -> AllowList {
        self.featured
            .as_ref()
            .map_or_else(AllowList::featured, |names| AllowList::new(names.iter().cloned()))
    }

    /// Social links paired with their highlight stat, if any.
    #[must_use]
    pub fn social_buttons(&self) -> Vec<(&SocialLink, Option<&'static str>)> {
        self.social_links
            .iter()
            .enumerate()
            .map(|(i, link)| (link, SOCIAL_STATS.get(i).copied()))
            .collect()
    }
}
