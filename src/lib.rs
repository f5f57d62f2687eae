//! # quizwire
//!
//! Extracts a bounded, ordered list of question/answer pairs from an
//! arbitrary quiz article page using structural and lexical heuristics
//! only — no machine learning, no fixed source-site schema.
//!
//! The pipeline runs in four stages per invocation: a content locator
//! picks the article-body subtree, a linearizer flattens it into typed
//! text blocks, a resolver scans the blocks for question markers and runs
//! an ordered answer cascade over a bounded window per question, and a
//! sibling-based fallback resolver takes over against the raw document
//! when the primary pass comes up empty.
//!
//! ## Quick Start
//!
//! ```rust
//! use quizwire::extract;
//!
//! let html = r#"<html><body><div class="entry-content">
//! <h3>Question 1: What is 2+2?</h3>
//! <p>Answer: 4</p>
//! </div></body></html>"#;
//!
//! let result = extract(html);
//! assert_eq!(result.questions[0].answer, "4");
//! ```
//!
//! Extraction is pure and never fails: heuristic misses surface as the
//! sentinel answer text, not as errors. [`Error`] covers only the
//! upstream fetch boundary.

mod error;
mod extract;
mod options;
mod result;

/// Pattern tables: question/answer markers, enumeration glyphs, noise
/// phrases, and selectors.
pub mod patterns;

/// Content locator (article-body subtree selection and pruning).
pub mod locate;

/// Block linearizer (typed, normalized, document-ordered text blocks).
pub mod blocks;

/// Question/answer resolver (marker scan + answer cascade).
pub mod resolver;

/// Sibling fallback resolver for irregular markup.
pub mod fallback;

/// Title resolution.
pub mod metadata;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Upstream document fetch.
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::fetch_document;
pub use options::Options;
pub use result::{ExtractResult, QaPair};

/// Extracts quiz question/answer pairs using default options.
///
/// # Example
///
/// ```rust
/// use quizwire::extract;
///
/// let result = extract("<html><body><p>No questions here.</p></body></html>");
/// assert!(result.questions.is_empty());
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractResult {
    extract_with_options(html, &Options::default())
}

/// Extracts quiz question/answer pairs with custom options.
///
/// # Example
///
/// ```rust
/// use quizwire::{extract_with_options, Options};
///
/// let options = Options {
///     require_question_mark: true,
///     ..Options::default()
/// };
/// let result = extract_with_options("<html><body></body></html>", &options);
/// assert!(result.questions.is_empty());
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ExtractResult {
    extract::run_pipeline(html, options)
}

/// Extracts from raw bytes with automatic charset detection.
///
/// Detects the encoding from meta tags and transcodes to UTF-8 before
/// running the pipeline; invalid bytes become replacement characters.
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ExtractResult {
    let html = encoding::transcode_to_utf8(html);
    extract(&html)
}

/// Extracts from raw bytes with custom options and charset detection.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> ExtractResult {
    let html = encoding::transcode_to_utf8(html);
    extract_with_options(&html, options)
}
