//! Portfolio content records.
//!
//! # Responsibility
//! - Define the two catalog record shapes (`Project`, `Post`).
//! - Expose one shared read surface (`ContentItem`) for logic that treats
//!   both uniformly: slug lookup, adjacency, facet filtering.
//!
//! # Invariants
//! - `slug` is the stable lookup key and is unique within its collection.
//! - A project has exactly one category; a post has none.
//! - Facet values keep declaration order; duplicates are not expected.

use serde::{Deserialize, Serialize};

/// Shared read surface over catalog records.
pub trait ContentItem {
    /// Stable URL-safe identifier.
    fn slug(&self) -> &str;
    /// Display title, searched by free-text queries.
    fn title(&self) -> &str;
    /// Description or excerpt, searched by free-text queries.
    fn summary(&self) -> &str;
    /// Single-select classification. `None` for records without one.
    fn category(&self) -> Option<&str>;
    /// Multi-select facet values (technologies or tags).
    fn facet_values(&self) -> &[String];
}

/// Portfolio project shown on the projects listing and detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Tools used by the project, in display order.
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    pub role: String,
    /// `YYYY-MM` month the project shipped.
    pub date: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Project {
    /// Creates a project with the fields relevant to lookup and filtering.
    ///
    /// Display-only fields start empty.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        technologies: Vec<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            image: String::new(),
            technologies,
            github: None,
            live: None,
            category: category.into(),
            featured: false,
            role: String::new(),
            date: String::new(),
            key_features: Vec::new(),
            gallery: Vec::new(),
        }
    }
}

impl ContentItem for Project {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn facet_values(&self) -> &[String] {
        &self.technologies
    }
}

/// Blog post shown on the blog listing and reader pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// `YYYY-MM-DD` publication date.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub excerpt: String,
    pub cover: String,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    /// Markdown body.
    pub content: String,
}

impl Post {
    /// Creates a post with the fields relevant to lookup and filtering.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            date: String::new(),
            tags,
            excerpt: excerpt.into(),
            cover: String::new(),
            read_time: 0,
            content: String::new(),
        }
    }
}

impl ContentItem for Post {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.excerpt
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn facet_values(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentItem, Post, Project};

    #[test]
    fn project_exposes_category_and_technologies() {
        let project = Project::new(
            "ai-os",
            "AI-Powered OS",
            "Linux with an assistant",
            "AI/ML",
            vec!["Python".to_string(), "Linux".to_string()],
        );
        assert_eq!(project.category(), Some("AI/ML"));
        assert_eq!(project.facet_values(), ["Python", "Linux"]);
        assert_eq!(project.summary(), "Linux with an assistant");
    }

    #[test]
    fn post_has_no_category() {
        let post = Post::new("a", "A", "excerpt", vec!["React".to_string()]);
        assert_eq!(post.category(), None);
        assert_eq!(post.facet_values(), ["React"]);
    }
}
