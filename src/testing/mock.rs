//! Mock repository source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Notify;

use crate::clients::RepositorySource;
use crate::error::Error;
use crate::types::RepositoryRecord;

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "repos.list")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Failure a mock response produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockError {
    /// Non-success HTTP status.
    Fetch { status: u16, message: String },
    /// Undecodable body.
    Parse(String),
}

impl MockError {
    fn to_error(&self) -> Error {
        match self {
            Self::Fetch { status, message } => Error::Fetch {
                status: *status,
                message: message.clone(),
            },
            Self::Parse(message) => Error::Parse(message.clone()),
        }
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub struct MockResponse<T: Clone> {
    /// The data to return
    pub data: Option<T>,
    /// Error to return instead of data
    pub error: Option<MockError>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl<T: Clone> Default for MockResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            call_count: 0,
        }
    }
}

impl<T: Clone> MockResponse<T> {
    /// Create a new mock response with data.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Create a new mock response failing with an HTTP status.
    pub fn with_status(status: u16, message: &str) -> Self {
        Self {
            error: Some(MockError::Fetch {
                status,
                message: message.to_string(),
            }),
            ..Self::default()
        }
    }

    /// Create a new mock response failing to decode.
    pub fn with_parse_error(message: &str) -> Self {
        Self {
            error: Some(MockError::Parse(message.to_string())),
            ..Self::default()
        }
    }

    /// Get the result, returning either the configured data or error.
    fn get_result(&mut self, default: T) -> Result<T, Error> {
        self.call_count += 1;
        if let Some(error) = &self.error {
            return Err(error.to_error());
        }
        Ok(self.data.clone().unwrap_or(default))
    }
}

/// Decrements the in-flight count when a call finishes or is dropped.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(count: &Arc<AtomicUsize>) -> Self {
        count.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(count))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// In-memory [`RepositorySource`] that records its calls.
///
/// Defaults to an empty repository list. A gated source holds every
/// response until [`release`](Self::release) is called, which lets tests
/// unmount or reload a view while a fetch is outstanding.
#[derive(Debug, Clone, Default)]
pub struct MockRepositorySource {
    calls: Arc<Mutex<Vec<MockCall>>>,
    list_response: Arc<Mutex<MockResponse<Vec<RepositoryRecord>>>>,
    gate: Option<Arc<Notify>>,
    in_flight: Arc<AtomicUsize>,
}

impl MockRepositorySource {
    /// Create a mock that answers immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose responses wait for [`release`](Self::release).
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    /// Configure the response for list calls.
    pub fn configure_list(&self, response: MockResponse<Vec<RepositoryRecord>>) {
        *self.list_response.lock().unwrap_or_else(|e| e.into_inner()) = response;
    }

    /// Let one held response through. A release before the call is
    /// remembered.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// All recorded calls.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of times the list response was served.
    pub fn list_call_count(&self) -> u32 {
        self.list_response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .call_count
    }

    /// Calls that have started but neither returned nor been cancelled.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Clear recorded calls.
    pub fn reset(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

#[async_trait]
impl RepositorySource for MockRepositorySource {
    async fn list_org_repos(
        &self,
        org: &str,
        per_page: Option<u32>,
    ) -> Result<Vec<RepositoryRecord>, Error> {
        let _in_flight = InFlight::enter(&self.in_flight);
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(MockCall::new(
                "repos.list",
                vec![org.to_string(), format!("{per_page:?}")],
            ));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.list_response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_result(Vec::new())
    }
}
