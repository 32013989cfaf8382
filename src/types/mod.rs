//! Data model types for the showcase crate.

pub mod repos;

// Re-exports
pub use repos::RepositoryRecord;
