//! Configuration options for quiz extraction.
//!
//! The `Options` struct unifies the historically duplicated loose/strict
//! pipeline variants behind explicit flags, with the shared pattern tables
//! in `patterns`.

/// Configuration options for quiz extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use quizwire::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     require_question_mark: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Require a `?` in the question text for a block to count as a
    /// question marker (the strict variant). Rejects false positives such
    /// as headings that merely start with `Q`, at the cost of dropping
    /// real questions typed without a question mark.
    ///
    /// Default: `false`
    pub require_question_mark: bool,

    /// When no question marker is found anywhere in the block sequence,
    /// return an empty sequence (forcing the sibling fallback) instead of
    /// keeping the full sequence as a last resort.
    ///
    /// Default: `false`
    pub require_question_anchor: bool,

    /// Maximum number of question/answer pairs to return.
    ///
    /// The upstream source presents a 5-question daily quiz; this is a
    /// domain constant, not a technical limit.
    ///
    /// Default: `5`
    pub max_questions: usize,

    /// Maximum number of blocks scanned after a question marker when
    /// building its answer window. Bounds worst-case scan cost and stops
    /// far-away, unrelated paragraphs from being attributed to a question.
    ///
    /// Default: `30`
    pub window_limit: usize,

    /// Maximum number of following element siblings the fallback resolver
    /// inspects per question marker.
    ///
    /// Default: `10`
    pub sibling_scan_limit: usize,

    /// Run the sibling-based fallback resolver against the raw document
    /// when the primary pass yields zero pairs.
    ///
    /// Default: `true`
    pub use_sibling_fallback: bool,

    /// Source URL of the document, reported in the result.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            require_question_mark: false,
            require_question_anchor: false,
            max_questions: 5,
            window_limit: 30,
            sibling_scan_limit: 10,
            use_sibling_fallback: true,
            url: None,
        }
    }
}
