//! Compiled regex patterns, CSS selectors, and phrase tables for extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`. Every
//! heuristic the pipeline relies on (question prefixes, answer markers,
//! enumeration glyphs, noise phrases, content anchors) lives here as data,
//! so strictness can be tuned without touching control flow.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder answer used when every detection rule comes up empty.
pub const ANSWER_SENTINEL: &str = "Answer not found";

// =============================================================================
// Question / Answer Marker Patterns
// =============================================================================

/// Matches a question lead-in: `Question`/`Q` + optional ordinal + optional
/// punctuation, e.g. `Question 1:`, `Q2)`, `Q.`.
pub static QUESTION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:question|q)\s*\d*\s*[:.)\-]?\s*").expect("QUESTION_PREFIX regex")
});

/// Matches an explicit answer lead-in: `Answer:`, `Ans.`, `Correct Answer -`.
/// Longest alternative first so `Correct Answer` is stripped whole.
pub static ANSWER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:correct\s+answer|answer|ans)\s*[:.)\-]?\s*").expect("ANSWER_PREFIX regex")
});

/// Matches a bare `Correct:` / `Correct -` lead-in on emphasized answers.
pub static CORRECT_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^correct\s*[:\-]?\s*").expect("CORRECT_LEAD regex"));

/// Collapses a run of trailing question marks to a single one.
pub static TRAILING_QMARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}$").expect("TRAILING_QMARKS regex"));

// =============================================================================
// Enumerated Option Patterns
// =============================================================================
// Ordered chain of independent prefix predicates; the resolver strips
// whichever matches first. New option-marker formats slot in here without
// touching the answer cascade.

/// Letter options: `A)`, `b.`, `C:`, `D-`.
pub static LETTER_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Da-d]\s*[).:\-]\s+").expect("LETTER_OPTION regex"));

/// Numeric options: `1)`, `(2)`, `3.`, `4:`.
pub static NUMERIC_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\(?\d{1,2}\)?\s*[).:\-]?\s+").expect("NUMERIC_OPTION regex"));

/// Circled-digit glyphs sometimes used for options.
pub static CIRCLED_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[①②③④⑤⑥⑦⑧⑨⑩]\s*").expect("CIRCLED_OPTION regex"));

/// Bullet glyphs.
pub static BULLET_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-•▪●]\s+").expect("BULLET_OPTION regex"));

/// Option prefixes in strip priority order.
#[must_use]
pub fn option_prefixes() -> [&'static Regex; 4] {
    [
        &*LETTER_OPTION,
        &*NUMERIC_OPTION,
        &*CIRCLED_OPTION,
        &*BULLET_OPTION,
    ]
}

// =============================================================================
// Noise Phrases
// =============================================================================
// Observed source pages interleave promotional/navigational lines among the
// real Q&A content. These are lexical filters, not content-semantic ones.

/// Lines beginning with this pattern (case-insensitive) are dropped.
pub static READ_ALSO_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^read also[:\s]").expect("READ_ALSO_LEAD regex"));

/// Lines containing any of these substrings (case-insensitive) are dropped.
pub const NOISE_CONTAINS: &[&str] = &["table of contents", "play telenor quiz", "quiz questions"];

/// True when a normalized line matches the noise-phrase deny-list.
#[must_use]
pub fn is_noise_line(text: &str) -> bool {
    if READ_ALSO_LEAD.is_match(text) {
        return true;
    }
    let lower = text.to_lowercase();
    NOISE_CONTAINS.iter().any(|phrase| lower.contains(phrase))
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Collapse whitespace runs to single spaces and trim both ends.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    WHITESPACE_NORMALIZE
        .replace_all(text, " ")
        .trim()
        .to_string()
}

// =============================================================================
// CSS Selectors
// =============================================================================

/// Content-root anchors in priority order. First non-empty match wins.
/// These are the containers long-form WordPress article markup typically uses.
pub const CONTENT_ANCHORS: &[&str] = &[
    ".entry-content",
    ".td-post-content",
    "article .post-content",
    "article",
];

/// Noise removed from inside the chosen content root before linearization:
/// table-of-contents widgets, share/social blocks, navigation and sidebars.
pub const ROOT_NOISE_SELECTOR: &str = "[id*=\"toc\"], [class*=\"toc\"], .toc-container, \
     .ez-toc-container, [class*=\"share\"], .sharedaddy, .jp-relatedposts, nav, aside";

/// Elements considered by the block linearizer, in document order.
pub const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, strong, b, em";

/// Broader candidate set scanned by the sibling fallback resolver.
pub const FALLBACK_CANDIDATE_SELECTOR: &str = "h3, h4, strong, b, em, p";

/// Sibling tags the fallback resolver will accept as answer material.
pub const FALLBACK_SIBLING_TAGS: &[&str] = &["p", "li", "strong", "b", "em"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_prefix_matches_common_forms() {
        assert!(QUESTION_PREFIX.is_match("Question 1: What is Rust?"));
        assert!(QUESTION_PREFIX.is_match("Q2) Capital of France?"));
        assert!(QUESTION_PREFIX.is_match("question 3 - Who?"));
        assert!(!QUESTION_PREFIX.is_match("The answer is below"));
    }

    #[test]
    fn answer_prefix_strips_correct_answer_whole() {
        let cleaned = ANSWER_PREFIX.replace("Correct Answer: 4", "");
        assert_eq!(cleaned, "4");
        let cleaned = ANSWER_PREFIX.replace("Ans. Paris", "");
        assert_eq!(cleaned, "Paris");
    }

    #[test]
    fn option_prefixes_match_expected_forms() {
        assert!(LETTER_OPTION.is_match("B) Lahore"));
        assert!(LETTER_OPTION.is_match("c. Karachi"));
        assert!(NUMERIC_OPTION.is_match("(1) First"));
        assert!(NUMERIC_OPTION.is_match("2. Second"));
        assert!(CIRCLED_OPTION.is_match("③ Third"));
        assert!(BULLET_OPTION.is_match("• Bullet"));
        assert!(!LETTER_OPTION.is_match("Everything else"));
    }

    #[test]
    fn noise_lines_are_detected() {
        assert!(is_noise_line("Read Also: Related Quiz"));
        assert!(is_noise_line("Table of Contents"));
        assert!(is_noise_line("Play Telenor Quiz and win"));
        assert!(is_noise_line("Today Quiz Questions"));
        assert!(!is_noise_line("Question 1: What is 2+2?"));
    }

    #[test]
    fn normalize_text_collapses_whitespace() {
        assert_eq!(normalize_text("  hello \n\t world  "), "hello world");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn trailing_qmarks_collapse() {
        let cleaned = TRAILING_QMARKS.replace("Really???", "?");
        assert_eq!(cleaned, "Really?");
    }
}
