//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, filter and repository calls into use-case APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod contact_service;
pub mod listing_service;
pub mod outline;
pub mod theme_service;
