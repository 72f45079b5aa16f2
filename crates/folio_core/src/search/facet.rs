//! Multi-criteria faceted filtering over catalog records.
//!
//! # Responsibility
//! - Own the caller-held filter state and its toggle transitions.
//! - Compute the visible subset of a record list for one filter state.
//!
//! # Invariants
//! - An item is visible iff it matches the query AND the category AND the
//!   tag facet. Within the tag facet any single overlap is enough.
//! - Empty query, no category and an empty tag set restrict nothing.
//! - Output keeps input order; filtering never reorders or deduplicates.
//! - Every input is total: unknown categories or tags yield an empty result.

use crate::model::content::ContentItem;
use std::collections::BTreeSet;

/// Filter configuration owned by the listing caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring tested against title and summary.
    pub query: String,
    /// Exact single-select category restriction.
    pub category: Option<String>,
    /// Multi-select tag/technology restriction (any overlap matches).
    pub selected_tags: BTreeSet<String>,
}

impl FilterState {
    /// Creates a state that restricts nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds `tag` when absent, removes it when present.
    ///
    /// Returns whether the tag is selected after the call.
    pub fn toggle_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.selected_tags.remove(&tag) {
            false
        } else {
            self.selected_tags.insert(tag);
            true
        }
    }

    /// Selects `category`, or clears the restriction when it is already
    /// the selected one.
    pub fn select_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if self.category.as_deref() == Some(category.as_str()) {
            self.category = None;
        } else {
            self.category = Some(category);
        }
    }

    /// Drops the category restriction.
    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Resets query, category and tag selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any facet currently restricts the result.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || self.category.is_some() || !self.selected_tags.is_empty()
    }

    /// Whether one item passes every facet.
    pub fn matches<T: ContentItem + ?Sized>(&self, item: &T) -> bool {
        let needle = self.query.to_lowercase();
        self.matches_with_needle(item, &needle)
    }

    fn matches_with_needle<T: ContentItem + ?Sized>(&self, item: &T, needle: &str) -> bool {
        matches_query(item, needle) && self.matches_category(item) && self.matches_tags(item)
    }

    fn matches_category<T: ContentItem + ?Sized>(&self, item: &T) -> bool {
        match self.category.as_deref() {
            None => true,
            Some(selected) => item.category() == Some(selected),
        }
    }

    fn matches_tags<T: ContentItem + ?Sized>(&self, item: &T) -> bool {
        self.selected_tags.is_empty()
            || item
                .facet_values()
                .iter()
                .any(|value| self.selected_tags.contains(value))
    }
}

/// Returns the items matching `state`, in input order.
pub fn filter_items<'a, T: ContentItem>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let needle = state.query.to_lowercase();
    items
        .iter()
        .filter(|item| state.matches_with_needle(*item, &needle))
        .collect()
}

fn matches_query<T: ContentItem + ?Sized>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item.title().to_lowercase().contains(needle)
        || item.summary().to_lowercase().contains(needle)
}
