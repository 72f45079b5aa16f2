//! Core domain logic for the Folio portfolio site.
//! This crate owns the content catalog, listing filters, contact inbox and
//! theme preference; rendering layers only consume it.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use catalog::bundled::{all_skills, bundled_posts, bundled_projects, bundled_skills};
pub use catalog::store::{Adjacent, Catalog, CatalogError, CatalogResult};
pub use config::{ConfigError, FolioConfig, Profile};
pub use logging::{init_logging, logging_status};
pub use model::contact::{
    ContactFieldError, ContactMessage, ContactSubmission, MessageId, MessageStats,
};
pub use model::content::{ContentItem, Post, Project};
pub use model::skill::SkillCategory;
pub use model::theme::Theme;
pub use repo::message_repo::{
    MessageListQuery, MessageRepository, RepoError, RepoResult, SqliteMessageRepository,
};
pub use repo::preference_repo::{PreferenceRepository, SqlitePreferenceRepository};
pub use search::facet::{filter_items, FilterState};
pub use service::contact_service::{ContactService, ContactServiceError};
pub use service::listing_service::{
    listing, post_facets, project_facets, FacetOptions, Listing, TECHNOLOGY_BADGE_LIMIT,
};
pub use service::outline::{post_outline, OutlineEntry};
pub use service::theme_service::ThemeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
