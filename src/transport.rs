//! HTTP transport for the showcase crate.
//!
//! Issues single, unauthenticated GET requests against the repository
//! listing API and classifies the outcome into [`Error::Fetch`],
//! [`Error::Parse`] or [`Error::Http`]. There is no retry loop: a failed
//! request is reported to the caller as-is.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;

/// Media type requested from the GitHub REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// User agent sent with every request. GitHub rejects anonymous agents.
pub const DEFAULT_USER_AGENT: &str = concat!("showcase/", env!("CARGO_PKG_VERSION"));

/// HTTP transport layer for read-only API calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://api.github.com>")
    /// * `timeout` - Request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Perform a GET request and decode the JSON body.
    ///
    /// # Arguments
    ///
    /// * `path` - API path (e.g., "/orgs/ds-horizon/repos")
    /// * `params` - Query parameters
    ///
    /// # Errors
    ///
    /// * [`Error::Http`] when the request cannot be sent or the body cannot be read
    /// * [`Error::Fetch`] on a non-success status
    /// * [`Error::Parse`] when a success body does not decode into `T`
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(p) = params {
            request = request.query(p);
        }

        debug!(url = %url, "sending request");

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(Self::fetch_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Build a `Fetch` error, using the API's `message` field when present.
    fn fetch_error(status: u16, body: &str) -> Error {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|data| {
                data.get("message")
                    .and_then(|v| v.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Error::Fetch { status, message }
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
