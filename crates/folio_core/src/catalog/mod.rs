//! Content catalog entry points.
//!
//! # Responsibility
//! - Hold read-only, ordered collections of projects and posts.
//! - Expose slug lookup, neighbour navigation and derived facet values.
//!
//! # Invariants
//! - Catalogs are built once and never mutated.
//! - Not-found is a normal `None` result, not an error.

pub mod bundled;
pub mod store;
