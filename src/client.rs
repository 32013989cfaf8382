//! Showcase main client.
//!
//! Provides the primary interface for reading the repository API.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::ReposClient;
use crate::config::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::Error;
use crate::transport::HttpTransport;

/// Main client for the repository API.
///
/// # Example
///
/// ```rust,ignore
/// use showcase::ShowcaseClient;
///
/// let client = ShowcaseClient::new(None, None)?;
/// let repos = client.repos().list("ds-horizon", Some(100)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ShowcaseClient {
    transport: Arc<HttpTransport>,
    repos: ReposClient,
}

impl ShowcaseClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (default: <https://api.github.com>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_API_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(base_url, timeout)?);

        Ok(Self {
            repos: ReposClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(Some(&config.api_url), Some(config.timeout()))
    }

    /// Get the underlying HTTP transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }
}
