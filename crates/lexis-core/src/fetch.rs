use crate::error::FetchError;

/// Raw upstream response. Non-success statuses are not errors at this level.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport used to pull upstream pages.
///
/// Implementations own headers, timeouts and connection handling; an `Err`
/// means no response was obtained at all.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
