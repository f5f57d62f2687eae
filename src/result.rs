//! Result types for extraction output.

use serde::{Deserialize, Serialize};

/// A single extracted question/answer pair.
///
/// `question` has its marker prefix stripped; `answer` is either detected
/// text or the fixed sentinel. Both are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// Question text, marker prefix removed.
    pub question: String,

    /// Resolved answer text, or the sentinel when no rule matched.
    pub answer: String,
}

/// Result of quiz extraction from an HTML document.
///
/// Constructed fresh per invocation and never mutated after return. Pairs
/// preserve the document order of their originating question markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Page title (Open Graph, `<title>`, or the fixed default).
    pub title: String,

    /// Extracted pairs, capped at `Options::max_questions`.
    pub questions: Vec<QaPair>,

    /// URL the document came from, when the caller provided one.
    #[serde(rename = "source", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}
