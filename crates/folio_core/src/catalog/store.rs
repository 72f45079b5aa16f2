//! Ordered, read-only catalog over content records.
//!
//! # Responsibility
//! - Hold one collection of records in canonical (declaration) order.
//! - Provide slug lookup, neighbour navigation and derived facet lists.
//!
//! # Invariants
//! - Slugs are non-empty and unique; construction rejects violations.
//! - The record list is never mutated after construction.
//! - Derived facet lists keep first-seen order and drop exact duplicates.

use crate::model::content::{ContentItem, Post, Project};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction error.
#[derive(Debug)]
pub enum CatalogError {
    /// Record at `index` has an empty slug.
    EmptySlug { index: usize },
    /// Two records share one slug.
    DuplicateSlug(String),
    /// Bundled source data cannot be decoded.
    InvalidData {
        source_name: &'static str,
        error: serde_json::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug { index } => write!(f, "catalog item #{index} has an empty slug"),
            Self::DuplicateSlug(slug) => write!(f, "duplicate catalog slug `{slug}`"),
            Self::InvalidData { source_name, error } => {
                write!(f, "invalid catalog data in `{source_name}`: {error}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidData { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Neighbours of one record in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent<'a, T> {
    pub previous: Option<&'a T>,
    pub next: Option<&'a T>,
}

/// Static, ordered collection of content records.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    positions: HashMap<String, usize>,
}

impl<T: ContentItem> Catalog<T> {
    /// Builds a catalog, enforcing slug presence and uniqueness.
    ///
    /// # Errors
    /// - `EmptySlug` when any record has a blank slug.
    /// - `DuplicateSlug` on the first repeated slug.
    pub fn try_new(items: Vec<T>) -> CatalogResult<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let slug = item.slug();
            if slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug { index });
            }
            if positions.insert(slug.to_string(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(slug.to_string()));
            }
        }

        Ok(Self { items, positions })
    }

    /// Exact-match lookup. `None` means not found.
    pub fn get_by_slug(&self, slug: &str) -> Option<&T> {
        self.positions.get(slug).map(|&index| &self.items[index])
    }

    /// Full catalog in canonical order.
    pub fn list_all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn distinct_categories(&self) -> Vec<&str> {
        first_seen(self.items.iter().filter_map(|item| item.category()))
    }

    /// Distinct facet values flattened across records, first-seen order.
    pub fn distinct_facet_values(&self) -> Vec<&str> {
        first_seen(
            self.items
                .iter()
                .flat_map(|item| item.facet_values().iter().map(String::as_str)),
        )
    }

    /// Previous and next records around `slug`.
    ///
    /// Both sides are `None` at the respective boundary, and both are `None`
    /// for an unknown slug.
    pub fn items_adjacent_to(&self, slug: &str) -> Adjacent<'_, T> {
        let Some(&index) = self.positions.get(slug) else {
            return Adjacent {
                previous: None,
                next: None,
            };
        };

        Adjacent {
            previous: index.checked_sub(1).and_then(|prev| self.items.get(prev)),
            next: self.items.get(index + 1),
        }
    }
}

impl Catalog<Project> {
    /// Distinct technologies across all projects.
    pub fn distinct_technologies(&self) -> Vec<&str> {
        self.distinct_facet_values()
    }

    /// Projects flagged as featured, in canonical order.
    pub fn featured(&self) -> Vec<&Project> {
        self.items.iter().filter(|project| project.featured).collect()
    }

    /// Projects in one exact category, in canonical order.
    pub fn by_category(&self, category: &str) -> Vec<&Project> {
        self.items
            .iter()
            .filter(|project| project.category == category)
            .collect()
    }
}

impl Catalog<Post> {
    /// Distinct tags across all posts.
    pub fn distinct_tags(&self) -> Vec<&str> {
        self.distinct_facet_values()
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::content::Post;

    fn post(slug: &str, tags: &[&str]) -> Post {
        Post::new(
            slug,
            slug.to_uppercase(),
            "excerpt",
            tags.iter().map(|tag| tag.to_string()).collect(),
        )
    }

    #[test]
    fn try_new_rejects_duplicate_slug() {
        let err = Catalog::try_new(vec![post("a", &[]), post("a", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(slug) if slug == "a"));
    }

    #[test]
    fn try_new_rejects_blank_slug() {
        let err = Catalog::try_new(vec![post("a", &[]), post("  ", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySlug { index: 1 }));
    }

    #[test]
    fn distinct_tags_are_case_sensitive() {
        let catalog =
            Catalog::try_new(vec![post("a", &["rust", "Rust"]), post("b", &["rust"])]).unwrap();
        assert_eq!(catalog.distinct_tags(), vec!["rust", "Rust"]);
    }

    #[test]
    fn single_item_has_no_neighbours() {
        let catalog = Catalog::try_new(vec![post("only", &[])]).unwrap();
        let adjacent = catalog.items_adjacent_to("only");
        assert!(adjacent.previous.is_none());
        assert!(adjacent.next.is_none());
    }
}
