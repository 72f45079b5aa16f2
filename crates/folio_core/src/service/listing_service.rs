//! Listing page use-cases for projects and posts.
//!
//! # Responsibility
//! - Shape one filtered listing (visible items plus counters) for a page.
//! - Expose the facet badges a listing page offers.
//!
//! # Invariants
//! - Filter state is owned by the caller and passed in on every call.
//! - Listing items keep canonical catalog order.

use crate::catalog::store::Catalog;
use crate::model::content::{ContentItem, Post, Project};
use crate::search::facet::{filter_items, FilterState};

/// Maximum technology badges offered on the project listing.
pub const TECHNOLOGY_BADGE_LIMIT: usize = 12;

/// Filtered view of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<'a, T> {
    /// Visible items in canonical order.
    pub items: Vec<&'a T>,
    /// Catalog size before filtering.
    pub total: usize,
    /// Whether the filter state restricts anything.
    pub has_active_filters: bool,
}

impl<T> Listing<'_, T> {
    pub fn visible(&self) -> usize {
        self.items.len()
    }

    /// Counter line shown while filters are active, e.g.
    /// `Showing 2 of 6 projects`.
    pub fn summary(&self, noun: &str) -> String {
        format!("Showing {} of {} {noun}", self.visible(), self.total)
    }
}

/// Facet badges offered by a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions<'a> {
    /// Single-select categories; empty for posts.
    pub categories: Vec<&'a str>,
    /// Multi-select technologies or tags.
    pub tags: Vec<&'a str>,
}

/// Applies `state` to `catalog` and packages the result.
pub fn listing<'a, T: ContentItem>(catalog: &'a Catalog<T>, state: &FilterState) -> Listing<'a, T> {
    Listing {
        items: filter_items(catalog.list_all(), state),
        total: catalog.len(),
        has_active_filters: state.has_active_filters(),
    }
}

/// Facet badges for the project listing.
///
/// Technologies are capped at [`TECHNOLOGY_BADGE_LIMIT`].
pub fn project_facets(catalog: &Catalog<Project>) -> FacetOptions<'_> {
    let mut tags = catalog.distinct_technologies();
    tags.truncate(TECHNOLOGY_BADGE_LIMIT);
    FacetOptions {
        categories: catalog.distinct_categories(),
        tags,
    }
}

/// Facet badges for the blog listing.
pub fn post_facets(catalog: &Catalog<Post>) -> FacetOptions<'_> {
    FacetOptions {
        categories: Vec::new(),
        tags: catalog.distinct_tags(),
    }
}

#[cfg(test)]
mod tests {
    use super::{listing, project_facets, TECHNOLOGY_BADGE_LIMIT};
    use crate::catalog::store::Catalog;
    use crate::model::content::Project;
    use crate::search::facet::FilterState;

    fn project(slug: &str, category: &str, technologies: &[&str]) -> Project {
        Project::new(
            slug,
            slug,
            "description",
            category,
            technologies.iter().map(|tech| tech.to_string()).collect(),
        )
    }

    #[test]
    fn summary_reports_visible_and_total() {
        let catalog = Catalog::try_new(vec![
            project("a", "Web", &["HTML5"]),
            project("b", "Tool", &["Python"]),
        ])
        .unwrap();
        let mut state = FilterState::new();
        state.toggle_tag("Python");

        let view = listing(&catalog, &state);
        assert!(view.has_active_filters);
        assert_eq!(view.summary("projects"), "Showing 1 of 2 projects");
    }

    #[test]
    fn technology_badges_are_capped() {
        let technologies: Vec<String> = (0..20).map(|i| format!("tech-{i}")).collect();
        let refs: Vec<&str> = technologies.iter().map(String::as_str).collect();
        let catalog = Catalog::try_new(vec![project("a", "Web", &refs)]).unwrap();

        let facets = project_facets(&catalog);
        assert_eq!(facets.tags.len(), TECHNOLOGY_BADGE_LIMIT);
        assert_eq!(facets.tags[0], "tech-0");
        assert_eq!(facets.categories, vec!["Web"]);
    }
}
