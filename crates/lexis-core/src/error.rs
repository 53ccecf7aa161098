/// Failure reported by a [`PageFetcher`](crate::PageFetcher).
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// Upstream answered with a non-success status, or the page had no headword
    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}
