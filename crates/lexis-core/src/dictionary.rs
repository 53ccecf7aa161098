use lexis_types::DictionaryRecord;

use crate::error::LookupError;

/// Something that can turn a looked-up word into a [`DictionaryRecord`]
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Look up an already trimmed, lowercased entry
    async fn lookup(&self, entry: &str) -> Result<DictionaryRecord, LookupError>;

    /// Get source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub language: String,
}
