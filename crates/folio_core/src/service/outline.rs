//! Post outline (table of contents) derivation.
//!
//! # Responsibility
//! - Extract `##`/`###` headings from post markdown.
//! - Derive the in-page anchor used by the reader view.
//!
//! # Invariants
//! - Entries keep document order.
//! - `#` (title) and `####`+ headings are not part of the outline.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{2,3})\s+(.+)$").expect("valid heading regex"));
static ANCHOR_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid anchor strip regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One heading in a post outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Fragment id for in-page links.
    pub anchor: String,
    /// Heading text without the leading hashes.
    pub text: String,
    /// Heading depth (2 or 3).
    pub level: u8,
}

/// Builds the outline of a markdown document.
pub fn post_outline(content: &str) -> Vec<OutlineEntry> {
    HEADING_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let hashes = caps.get(1)?.as_str();
            let text = caps.get(2)?.as_str().trim_end_matches('\r').to_string();
            Some(OutlineEntry {
                anchor: heading_anchor(&text),
                level: u8::try_from(hashes.len()).ok()?,
                text,
            })
        })
        .collect()
}

/// Derives an anchor: lowercase, ASCII alphanumerics and whitespace kept,
/// whitespace runs joined by `-`.
pub fn heading_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = ANCHOR_STRIP_RE.replace_all(&lowered, "");
    WHITESPACE_RE.replace_all(&stripped, "-").into_owned()
}
