//! Block linearizer.
//!
//! Walks the content root in document order and flattens it into a sequence
//! of typed, whitespace-normalized text blocks. Empty blocks and known noise
//! phrases are dropped at creation; everything downstream treats the
//! sequence as read-only data, so no live DOM traversal leaks past here.

use dom_query::Selection;

use crate::options::Options;
use crate::patterns::{is_noise_line, normalize_text, BLOCK_SELECTOR};
use crate::resolver::is_question;

/// Element category of a linearized block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    ListItem,
    Emphasis,
}

impl BlockTag {
    /// Map a lowercase element name onto a block tag.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            "p" => Some(Self::Paragraph),
            "li" => Some(Self::ListItem),
            "strong" | "b" | "em" => Some(Self::Emphasis),
            _ => None,
        }
    }
}

/// A normalized `(tag, text)` unit. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub tag: BlockTag,
    pub text: String,
}

/// Flatten `root` into an ordered block sequence.
///
/// After the full sequence is built, everything before the first question
/// marker is discarded: pre-question boilerplate is never a valid answer
/// source. With no marker at all, `require_question_anchor` decides between
/// an empty sequence (forcing the sibling fallback) and keeping the full
/// sequence as a last resort.
#[must_use]
pub fn linearize(root: &Selection, options: &Options) -> Vec<TextBlock> {
    let mut blocks = Vec::new();

    for node in root.select(BLOCK_SELECTOR).nodes() {
        let sel = Selection::from(*node);
        let Some(name) = node.node_name() else {
            continue;
        };
        let Some(tag) = BlockTag::from_name(&name.to_lowercase()) else {
            continue;
        };

        let text = normalize_text(&sel.text());
        if text.is_empty() || is_noise_line(&text) {
            continue;
        }

        blocks.push(TextBlock { tag, text });
    }

    match blocks.iter().position(|b| is_question(&b.text, options)) {
        Some(first) => {
            blocks.drain(..first);
            blocks
        }
        None if options.require_question_anchor => Vec::new(),
        None => blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn blocks_for(html: &str, options: &Options) -> Vec<TextBlock> {
        let doc = Document::from(html);
        let root = doc.select("body");
        linearize(&root, options)
    }

    #[test]
    fn blocks_are_typed_and_ordered() {
        let html = r#"
            <html><body>
              <h2>Heading</h2>
              <p>First paragraph</p>
              <ul><li>Item one</li></ul>
              <p><strong>Bold text</strong></p>
            </body></html>
        "#;
        let blocks = blocks_for(html, &Options::default());
        let tags: Vec<BlockTag> = blocks.iter().map(|b| b.tag).collect();
        assert!(tags.contains(&BlockTag::H2));
        assert!(tags.contains(&BlockTag::ListItem));
        assert!(tags.contains(&BlockTag::Emphasis));
        // document order is preserved
        let heading = blocks.iter().position(|b| b.text == "Heading");
        let item = blocks.iter().position(|b| b.text == "Item one");
        assert!(heading < item);
    }

    #[test]
    fn empty_and_noise_blocks_are_dropped() {
        let html = r#"
            <html><body>
              <p>   </p>
              <p>Read Also: Related Quiz</p>
              <p>Table of Contents</p>
              <h3>Question 1: What is 2+2?</h3>
              <p>Answer: 4</p>
            </body></html>
        "#;
        let blocks = blocks_for(html, &Options::default());
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].text.starts_with("Question 1"));
    }

    #[test]
    fn pre_question_boilerplate_is_discarded() {
        let html = r#"
            <html><body>
              <p>Welcome to the daily quiz roundup.</p>
              <p>Updated every morning.</p>
              <h3>Question 1: What is 2+2?</h3>
              <p>Answer: 4</p>
            </body></html>
        "#;
        let blocks = blocks_for(html, &Options::default());
        assert!(blocks[0].text.starts_with("Question 1"));
        assert!(!blocks.iter().any(|b| b.text.contains("Welcome")));
    }

    #[test]
    fn no_marker_keeps_sequence_by_default() {
        let html = "<html><body><p>Just an article.</p></body></html>";
        let blocks = blocks_for(html, &Options::default());
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn no_marker_empties_sequence_when_anchor_required() {
        let html = "<html><body><p>Just an article.</p></body></html>";
        let options = Options {
            require_question_anchor: true,
            ..Options::default()
        };
        let blocks = blocks_for(html, &options);
        assert!(blocks.is_empty());
    }
}
