//! Resource clients for the showcase crate.

pub mod repos;

// Re-exports
pub use repos::{ReposClient, RepositorySource};
