//! Mapping of pipeline results to render states.

use serde::Serialize;

use crate::pipeline::PipelineResult;
use crate::types::RepositoryRecord;

/// Shown in place of a missing or empty repository description.
pub const DESCRIPTION_FALLBACK: &str = "No description available";

/// Logo used for every project card.
pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg";

/// Display card for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub logo_src: String,
    pub stars: u64,
    pub github_url: String,
}

impl From<&RepositoryRecord> for ProjectCard {
    fn from(repo: &RepositoryRecord) -> Self {
        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DESCRIPTION_FALLBACK)
            .to_string();

        Self {
            title: repo.name.clone(),
            description,
            logo_src: PLACEHOLDER_LOGO.to_string(),
            stars: repo.star_count,
            github_url: repo.url.clone(),
        }
    }
}

/// What a project list view draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum RenderState {
    /// Skeleton cards while the fetch is outstanding.
    Placeholders(usize),
    /// Visitor-facing error message. Never accompanied by partial data.
    Error(String),
    /// One card per repository, in pipeline order.
    Cards(Vec<ProjectCard>),
}

/// Project a pipeline result into what the view draws.
///
/// `placeholders` is a display constant of the view, not derived from data.
#[must_use]
pub fn project(result: &PipelineResult, placeholders: usize) -> RenderState {
    match result {
        PipelineResult::Loading => RenderState::Placeholders(placeholders),
        PipelineResult::Failure(error) => RenderState::Error(error.user_message().to_string()),
        PipelineResult::Success(records) => {
            RenderState::Cards(records.iter().map(ProjectCard::from).collect())
        }
    }
}
