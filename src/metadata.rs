//! Document title resolution.
//!
//! Runs on the same per-request parse as the extraction pipeline, before
//! any pruning. Preference order: Open Graph title, `<title>` element,
//! fixed default.

use dom_query::{Document, Selection};

use crate::patterns::normalize_text;

/// Title used when the document declares none.
pub const DEFAULT_TITLE: &str = "Telenor Quiz";

/// Resolve the page title.
#[must_use]
pub fn resolve_title(doc: &Document) -> String {
    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);
        let name = meta
            .attr("property")
            .or_else(|| meta.attr("name"))
            .map(|s| s.to_lowercase())
            .unwrap_or_default();
        if name == "og:title" {
            if let Some(content) = meta.attr("content") {
                let title = normalize_text(&content);
                if !title.is_empty() {
                    return title;
                }
            }
        }
    }

    let title = normalize_text(&doc.select("title").text());
    if !title.is_empty() {
        return title;
    }

    DEFAULT_TITLE.to_string()
}
