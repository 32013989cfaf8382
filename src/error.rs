//! Error types for the showcase crate.

use thiserror::Error;

/// Message shown to visitors whenever a project list cannot be loaded.
///
/// Every failure kind collapses to this one string; the underlying error
/// is only logged.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load projects from GitHub. Please try again later.";

/// Main error type for the showcase crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status.
    #[error("Fetch error: HTTP {status}: {message}")]
    Fetch { status: u16, message: String },

    /// The response body could not be decoded into repository records.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of a `Fetch` error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API rejected the request.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Whether the API answered with a body we could not decode.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// The visitor-facing message. Identical for every variant.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}
