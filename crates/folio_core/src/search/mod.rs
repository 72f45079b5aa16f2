//! Listing search entry points.
//!
//! # Responsibility
//! - Expose the faceted filter used by project and blog listings.
//! - Keep filtering a pure function of records and caller-owned state.

pub mod facet;
