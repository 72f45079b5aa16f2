//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories require a migrated connection and refuse to start without
//!   their tables.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod message_repo;
pub mod preference_repo;
