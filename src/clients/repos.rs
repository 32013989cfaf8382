//! Repositories resource client.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::RepositoryRecord;

/// Anything that can list an organisation's repositories.
///
/// [`ReposClient`] talks to the real API; tests substitute
/// [`MockRepositorySource`](crate::testing::MockRepositorySource).
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// List the repositories owned by `org`.
    ///
    /// `per_page` is forwarded as the page-size query parameter when set.
    async fn list_org_repos(
        &self,
        org: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<RepositoryRecord>, Error>;
}

/// Client for repository listing.
#[derive(Debug, Clone)]
pub struct ReposClient {
    transport: Arc<HttpTransport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the public repositories of an organisation.
    ///
    /// This is an unauthenticated request. A single GET is issued; there are
    /// no retries and no caching.
    ///
    /// # Arguments
    ///
    /// * `org` - Organisation login (e.g., "ds-horizon")
    /// * `per_page` - Optional page size
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on a non-success status and [`Error::Parse`]
    /// when the body is not a list of repositories.
    pub async fn list(
        &self,
        org: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<RepositoryRecord>, Error> {
        let path = format!("/orgs/{org}/repos");
        let per_page_str = per_page.map(|n| n.to_string());

        let repos: Vec<RepositoryRecord> = match per_page_str.as_deref() {
            Some(n) => {
                let params = [("per_page", n)];
                self.transport.get(&path, Some(&params)).await?
            }
            None => self.transport.get(&path, None).await?,
        };

        debug!(org, count = repos.len(), "fetched repositories");
        Ok(repos)
    }
}

#[async_trait]
impl RepositorySource for ReposClient {
    async fn list_org_repos(
        &self,
        org: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<RepositoryRecord>, Error> {
        self.list(org, per_page).await
    }
}
