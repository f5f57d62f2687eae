//! Content locator.
//!
//! Picks the subtree most likely to hold the article body and strips
//! table-of-contents, share, and navigation noise out of it before
//! linearization. Anchors are tried in fixed priority order; absence of all
//! of them degrades to the whole document body, never to a failure.
//!
//! The pruning mutates the parsed document, so callers must hand this a
//! per-request parse, never a shared one.

use dom_query::{Document, Selection};

use crate::patterns::{normalize_text, CONTENT_ANCHORS, ROOT_NOISE_SELECTOR};

/// Select the content root for `doc` and prune noise inside it.
#[must_use]
pub fn find_content_root(doc: &Document) -> Selection<'_> {
    let root = select_anchor(doc);

    // Destructive, but scoped to this request's parse.
    root.select(ROOT_NOISE_SELECTOR).remove();

    root
}

/// First anchor that resolves to a non-empty subtree wins.
fn select_anchor(doc: &Document) -> Selection<'_> {
    for anchor in CONTENT_ANCHORS {
        let candidates = doc.select(anchor);
        if let Some(node) = candidates.nodes().first() {
            let first = Selection::from(*node);
            if !normalize_text(&first.text()).is_empty() {
                tracing::debug!(%anchor, "content root selected");
                return first;
            }
        }
    }

    tracing::debug!("no content anchor resolved, scanning whole body");
    doc.select("body")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_content_wins_over_article() {
        let html = r#"
            <html><body>
              <article><p>OUTER</p></article>
              <div class="entry-content"><p>INNER</p></div>
            </body></html>
        "#;
        let doc = Document::from(html);
        let root = find_content_root(&doc);
        assert!(root.text().contains("INNER"));
        assert!(!root.text().contains("OUTER"));
    }

    #[test]
    fn empty_anchor_is_skipped() {
        let html = r#"
            <html><body>
              <div class="entry-content">   </div>
              <article><p>BODY_TEXT</p></article>
            </body></html>
        "#;
        let doc = Document::from(html);
        let root = find_content_root(&doc);
        assert!(root.text().contains("BODY_TEXT"));
    }

    #[test]
    fn degrades_to_body_without_anchors() {
        let html = "<html><body><p>PLAIN</p></body></html>";
        let doc = Document::from(html);
        let root = find_content_root(&doc);
        assert!(root.text().contains("PLAIN"));
    }

    #[test]
    fn toc_and_share_widgets_are_pruned() {
        let html = r#"
            <html><body>
              <div class="entry-content">
                <div class="ez-toc-container">TOC_TEXT</div>
                <div class="share-buttons">SHARE_TEXT</div>
                <nav>NAV_TEXT</nav>
                <p>REAL_TEXT</p>
              </div>
            </body></html>
        "#;
        let doc = Document::from(html);
        let root = find_content_root(&doc);
        let text = root.text().to_string();
        assert!(text.contains("REAL_TEXT"));
        assert!(!text.contains("TOC_TEXT"));
        assert!(!text.contains("SHARE_TEXT"));
        assert!(!text.contains("NAV_TEXT"));
    }
}
