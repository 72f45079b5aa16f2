//! Site content compiled into the binary.
//!
//! # Responsibility
//! - Decode the bundled JSON sources once per process.
//! - Hand out `'static` read-only catalogs.
//!
//! # Invariants
//! - Decoding happens at most once per catalog; later calls are lookups.
//! - A decode failure is returned to the caller, never a panic.

use super::store::{Catalog, CatalogError, CatalogResult};
use crate::model::content::{ContentItem, Post, Project};
use crate::model::skill::SkillCategory;
use log::{error, info};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

const PROJECTS_SOURCE: &str = include_str!("../../data/projects.json");
const POSTS_SOURCE: &str = include_str!("../../data/posts.json");
const SKILLS_SOURCE: &str = include_str!("../../data/skills.json");

static PROJECTS: OnceCell<Catalog<Project>> = OnceCell::new();
static POSTS: OnceCell<Catalog<Post>> = OnceCell::new();
static SKILLS: OnceCell<Vec<SkillCategory>> = OnceCell::new();

/// Bundled project catalog.
pub fn bundled_projects() -> CatalogResult<&'static Catalog<Project>> {
    PROJECTS.get_or_try_init(|| {
        let items = decode::<Vec<Project>>("projects.json", PROJECTS_SOURCE)?;
        build("projects", items)
    })
}

/// Bundled blog post catalog.
pub fn bundled_posts() -> CatalogResult<&'static Catalog<Post>> {
    POSTS.get_or_try_init(|| {
        let items = decode::<Vec<Post>>("posts.json", POSTS_SOURCE)?;
        build("posts", items)
    })
}

/// Bundled skill groups in display order.
pub fn bundled_skills() -> CatalogResult<&'static [SkillCategory]> {
    SKILLS
        .get_or_try_init(|| decode::<Vec<SkillCategory>>("skills.json", SKILLS_SOURCE))
        .map(Vec::as_slice)
}

/// All skill names flattened across groups, in display order.
pub fn all_skills() -> CatalogResult<Vec<&'static str>> {
    Ok(bundled_skills()?
        .iter()
        .flat_map(|group| group.skills.iter().map(String::as_str))
        .collect())
}

fn decode<T: DeserializeOwned>(source_name: &'static str, raw: &str) -> CatalogResult<T> {
    serde_json::from_str(raw).map_err(|error| {
        error!(
            "event=catalog_load module=catalog status=error source={} error={}",
            source_name, error
        );
        CatalogError::InvalidData { source_name, error }
    })
}

fn build<T: ContentItem>(
    collection: &str,
    items: Vec<T>,
) -> CatalogResult<Catalog<T>> {
    let catalog = Catalog::try_new(items).inspect_err(|err| {
        error!(
            "event=catalog_load module=catalog status=error collection={} error={}",
            collection, err
        );
    })?;
    info!(
        "event=catalog_load module=catalog status=ok collection={} items={}",
        collection,
        catalog.len()
    );
    Ok(catalog)
}
