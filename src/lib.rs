//! Showcase for an organisation's open-source projects.
//!
//! Fetches the organisation's repositories, narrows them to a featured
//! allow-list where needed, orders them by stars and projects the outcome
//! into what a page draws: loading placeholders, an error message, or
//! project cards.
//!
//! # Quick Start
//!
//! ```rust
//! use showcase::{filter_allowed, sort_by_stars, AllowList, RepositoryRecord};
//!
//! let repos = vec![
//!     RepositoryRecord::new("a", 5),
//!     RepositoryRecord::new("b", 20),
//!     RepositoryRecord::new("c", 5),
//! ];
//! let featured = sort_by_stars(filter_allowed(repos, &AllowList::new(["a", "c"])));
//! assert_eq!(featured[0].name, "a");
//! assert_eq!(featured[1].name, "c");
//! ```

pub mod client;
pub mod clients;
pub mod community;
pub mod config;
pub mod error;
pub mod navbar;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod testing;
pub mod transport;
pub mod types;
pub mod view;

// Re-exports
pub use client::ShowcaseClient;
pub use clients::{ReposClient, RepositorySource};
pub use community::{Meetup, SiteData, SocialLink};
pub use config::{Config, ConfigError};
pub use error::{Error, LOAD_FAILURE_MESSAGE};
pub use navbar::{NavLink, NavbarState, NAV_LINKS};
pub use pipeline::{
    filter_allowed, run_pipeline, sort_by_stars, AllowList, PipelineResult, ProjectsQuery,
};
pub use projection::{project, ProjectCard, RenderState, DESCRIPTION_FALLBACK};
pub use transport::HttpTransport;
pub use types::RepositoryRecord;
pub use view::ProjectsView;
