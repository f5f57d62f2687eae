//! Error types for quizwire.
//!
//! Extraction itself never fails (heuristic misses are data, not errors);
//! these errors cover the upstream fetch boundary only.

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream page returned a non-2xx status.
    #[error("upstream fetch failed with status {0}")]
    Upstream(u16),

    /// Transport-level failure reaching the upstream page.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;
