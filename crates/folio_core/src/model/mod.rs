//! Domain model for portfolio content, contact messages and preferences.
//!
//! # Responsibility
//! - Define canonical data structures used by catalog, search and services.
//! - Keep one shared read surface over projects and posts.
//!
//! # Invariants
//! - Catalog records are identified by a slug unique within their collection.
//! - Stored contact messages are identified by a stable `MessageId`.

pub mod contact;
pub mod content;
pub mod skill;
pub mod theme;
