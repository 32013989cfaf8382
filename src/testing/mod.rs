//! Testing utilities for the showcase crate.
//!
//! Provides a mock repository source for testing views and pipelines
//! without making real API calls.

mod mock;

pub use mock::{MockCall, MockError, MockRepositorySource, MockResponse};
