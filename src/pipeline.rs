//! Repository list pipeline: fetch, optional allow-list filter, star sort.
//!
//! Each invocation is independent. Nothing is cached between runs; a view
//! that wants fresh data simply runs the pipeline again.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::clients::RepositorySource;
use crate::error::Error;
use crate::types::RepositoryRecord;

/// Repositories highlighted in the featured section when no site data
/// overrides them.
pub const FEATURED_REPO_NAMES: [&str; 5] = [
    "react-native-fast-image",
    "marco",
    "checkmate",
    "defrost",
    "rn-benchmarking",
];

/// Loading placeholders shown by the featured view.
pub const FEATURED_PLACEHOLDERS: usize = 4;

/// Loading placeholders shown by the all-projects view.
pub const ALL_PLACEHOLDERS: usize = 6;

/// Fixed set of repository names eligible for featured display.
///
/// Names are matched exactly and case-sensitively. Insertion order is kept
/// for display; duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from any collection of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// The built-in featured list.
    #[must_use]
    pub fn featured() -> Self {
        Self::new(FEATURED_REPO_NAMES)
    }

    /// Whether `name` is on the list.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::featured()
    }
}

/// Keep only the records whose name is on the allow-list.
///
/// Input order is preserved.
#[must_use]
pub fn filter_allowed(
    records: Vec<RepositoryRecord>,
    allow_list: &AllowList,
) -> Vec<RepositoryRecord> {
    records
        .into_iter()
        .filter(|repo| allow_list.contains(&repo.name))
        .collect()
}

/// Order records by star count, highest first.
///
/// The sort is stable: records with equal star counts keep their input order.
#[must_use]
pub fn sort_by_stars(mut records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    records.sort_by(|a, b| b.star_count.cmp(&a.star_count));
    records
}

/// Which project list a view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsQuery {
    /// Allow-listed repositories, fetched with the API's default page size.
    Featured(AllowList),
    /// Every repository, fetched with an explicit page size.
    All { per_page: u32 },
}

impl ProjectsQuery {
    /// Featured query over the built-in allow-list.
    #[must_use]
    pub fn featured() -> Self {
        Self::Featured(AllowList::featured())
    }

    /// All-projects query with the given page size.
    #[must_use]
    pub fn all(per_page: u32) -> Self {
        Self::All { per_page }
    }

    /// Page size forwarded to the fetcher.
    #[must_use]
    pub fn per_page(&self) -> Option<u32> {
        match self {
            Self::Featured(_) => None,
            Self::All { per_page } => Some(*per_page),
        }
    }

    /// Allow-list applied before sorting, if any.
    #[must_use]
    pub fn allow_list(&self) -> Option<&AllowList> {
        match self {
            Self::Featured(list) => Some(list),
            Self::All { .. } => None,
        }
    }

    /// Number of loading placeholders the view renders.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        match self {
            Self::Featured(_) => FEATURED_PLACEHOLDERS,
            Self::All { .. } => ALL_PLACEHOLDERS,
        }
    }

    /// Stable key identifying the query.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Featured(_) => "github-repos",
            Self::All { .. } => "all-github-repos",
        }
    }

    /// Filter (when featured) then sort already-fetched records.
    #[must_use]
    pub fn apply(&self, records: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
        let records = match self.allow_list() {
            Some(list) => filter_allowed(records, list),
            None => records,
        };
        sort_by_stars(records)
    }
}

/// Outcome of one pipeline invocation.
#[derive(Debug, Clone)]
pub enum PipelineResult {
    /// The fetch is outstanding.
    Loading,
    /// Filtered and sorted records.
    Success(Vec<RepositoryRecord>),
    /// The fetch or decode failed.
    Failure(Arc<Error>),
}

impl PipelineResult {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Records of a successful run.
    #[must_use]
    pub fn records(&self) -> Option<&[RepositoryRecord]> {
        match self {
            Self::Success(records) => Some(records),
            _ => None,
        }
    }

    /// Error of a failed run.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }
}

impl From<Result<Vec<RepositoryRecord>, Error>> for PipelineResult {
    fn from(result: Result<Vec<RepositoryRecord>, Error>) -> Self {
        match result {
            Ok(records) => Self::Success(records),
            Err(error) => Self::Failure(Arc::new(error)),
        }
    }
}

/// Run the whole pipeline once: fetch, filter, sort.
///
/// Never returns `Loading`.
pub async fn run_pipeline<S>(source: &S, org: &str, query: &ProjectsQuery) -> PipelineResult
where
    S: RepositorySource + ?Sized,
{
    let fetched = source
        .list_org_repos(org, query.per_page())
        .await
        .map(|records| {
            let fetched_count = records.len();
            let records = query.apply(records);
            debug!(
                key = query.key(),
                fetched = fetched_count,
                shown = records.len(),
                "pipeline finished"
            );
            records
        });

    if let Err(error) = &fetched {
        warn!(key = query.key(), org, "failed to load projects: {}", error);
    }
    PipelineResult::from(fetched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[RepositoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_filter_then_sort_keeps_tie_order() {
        let input = vec![
            RepositoryRecord::new("a", 5),
            RepositoryRecord::new("b", 20),
            RepositoryRecord::new("c", 5),
        ];
        let allow = AllowList::new(["a", "c"]);

        let filtered = filter_allowed(input, &allow);
        assert_eq!(names(&filtered), vec!["a", "c"]);

        let sorted = sort_by_stars(filtered);
        assert_eq!(names(&sorted), vec!["a", "c"]);
    }

    #[test]
    fn test_sort_descending() {
        let input = vec![
            RepositoryRecord::new("low", 1),
            RepositoryRecord::new("high", 300),
            RepositoryRecord::new("mid", 40),
        ];

        assert_eq!(names(&sort_by_stars(input)), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let input = vec![RepositoryRecord::new("Marco", 10), RepositoryRecord::new("marco", 3)];

        let filtered = filter_allowed(input, &AllowList::featured());
        assert_eq!(names(&filtered), vec!["marco"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(filter_allowed(Vec::new(), &AllowList::featured()).is_empty());
        assert!(sort_by_stars(Vec::new()).is_empty());
        let no_names = AllowList::new(Vec::<String>::new());
        assert!(filter_allowed(vec![RepositoryRecord::new("x", 1)], &no_names).is_empty());
    }

    #[test]
    fn test_allow_list_dedups() {
        let list = AllowList::new(["marco", "defrost", "marco"]);

        assert_eq!(list.len(), 2);
        assert_eq!(list.names(), ["marco".to_string(), "defrost".to_string()]);
    }

    #[test]
    fn test_query_shapes() {
        let featured = ProjectsQuery::featured();
        assert_eq!(featured.per_page(), None);
        assert_eq!(featured.placeholder_count(), 4);
        assert_eq!(featured.allow_list().map(AllowList::len), Some(5));

        let all = ProjectsQuery::all(100);
        assert_eq!(all.per_page(), Some(100));
        assert_eq!(all.placeholder_count(), 6);
        assert!(all.allow_list().is_none());
        assert_ne!(featured.key(), all.key());
    }

    #[test]
    fn test_all_query_does_not_filter() {
        let input = vec![RepositoryRecord::new("zeta", 2), RepositoryRecord::new("marco", 9)];

        let out = ProjectsQuery::all(100).apply(input);
        assert_eq!(names(&out), vec!["marco", "zeta"]);
    }

    #[test]
    fn test_result_from_error() {
        let result = PipelineResult::from(Err(Error::Parse("bad".to_string())));

        assert!(result.error().is_some_and(Error::is_parse));
        assert!(result.records().is_none());
        assert!(!result.is_loading());
    }

    #[tokio::test]
    async fn test_run_pipeline_maps_both_outcomes() {
        use crate::testing::{MockRepositorySource, MockResponse};

        let source = MockRepositorySource::new();
        source.configure_list(MockResponse::with_data(vec![
            RepositoryRecord::new("website", 9),
            RepositoryRecord::new("marco", 3),
            RepositoryRecord::new("checkmate", 8),
        ]));
        let result = run_pipeline(&source, "ds-horizon", &ProjectsQuery::featured()).await;
        assert_eq!(names(result.records().expect("should succeed")), vec!["checkmate", "marco"]);

        source.configure_list(MockResponse::with_status(500, "Server Error"));
        let result = run_pipeline(&source, "ds-horizon", &ProjectsQuery::all(100)).await;
        assert_eq!(result.error().and_then(Error::status), Some(500));
        assert!(!result.is_loading());
    }
}
