use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lexis_config::cache::CacheConfig;
use lexis_config::upstream::UpstreamConfig;
use lexis_core::{
    Cache, DictionarySource, LookupError, PageFetcher, SourceMetadata, TtlCache, cache_key,
};
use lexis_types::{DictionaryRecord, VerbForm};
use tokio::sync::OwnedMutexGuard;

use crate::dictionary::DictionaryPageExtractor;
use crate::inflection::extract_verb_forms;

/// English lookups against the dictionary page plus its companion
/// inflection page.
///
/// Both pages are fetched concurrently. The dictionary page decides
/// success; the inflection page only ever adds verb forms. Finished
/// records are cached under the dictionary URL, verb forms separately
/// under the inflection URL.
pub struct EnglishDictionary {
    fetcher: Arc<dyn PageFetcher>,
    upstream: UpstreamConfig,
    extractor: DictionaryPageExtractor,
    records: Arc<dyn Cache<DictionaryRecord>>,
    verb_forms: Arc<dyn Cache<Vec<VerbForm>>>,
    in_flight: InFlight,
}

impl EnglishDictionary {
    pub fn new(fetcher: Arc<dyn PageFetcher>, upstream: UpstreamConfig, cache: CacheConfig) -> Self {
        let records: Arc<dyn Cache<DictionaryRecord>> =
            Arc::new(TtlCache::with_limits(cache.ttl(), cache.max_entries));
        let verb_forms: Arc<dyn Cache<Vec<VerbForm>>> =
            Arc::new(TtlCache::with_limits(cache.ttl(), cache.max_entries));

        Self::with_caches(fetcher, upstream, records, verb_forms)
    }

    /// Build with caller-provided caches, e.g. a shared or external store
    pub fn with_caches(
        fetcher: Arc<dyn PageFetcher>,
        upstream: UpstreamConfig,
        records: Arc<dyn Cache<DictionaryRecord>>,
        verb_forms: Arc<dyn Cache<Vec<VerbForm>>>,
    ) -> Self {
        let extractor = DictionaryPageExtractor::new(upstream.site_origin.as_str());

        Self {
            fetcher,
            upstream,
            extractor,
            records,
            verb_forms,
            in_flight: InFlight::default(),
        }
    }

    async fn fetch_record(&self, url: &str) -> Result<DictionaryRecord, LookupError> {
        let page = self.fetcher.fetch(url).await?;

        if !page.is_success() {
            return Err(LookupError::NotFound(format!(
                "{} returned HTTP {}",
                url, page.status
            )));
        }

        self.extractor.extract(&page.body)
    }

    /// Verb forms for the companion page. Never fails: any problem is
    /// logged and yields an empty list.
    async fn fetch_verb_forms(&self, url: &str) -> Vec<VerbForm> {
        let key = cache_key(url);
        if let Some(forms) = self.verb_forms.get(&key) {
            tracing::debug!("Verb forms cache hit: {}", url);
            return forms;
        }

        match self.fetcher.fetch(url).await {
            Ok(page) if page.is_success() => {
                let forms = extract_verb_forms(&page.body);
                tracing::debug!("Extracted {} verb forms from {}", forms.len(), url);
                self.verb_forms.set(&key, forms.clone());
                forms
            }
            Ok(page) => {
                tracing::warn!("Inflection page {} returned HTTP {}", url, page.status);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch inflection page {}: {}", url, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl DictionarySource for EnglishDictionary {
    async fn lookup(&self, entry: &str) -> Result<DictionaryRecord, LookupError> {
        let dictionary_url = self.upstream.dictionary_url(entry);
        let key = cache_key(&dictionary_url);

        if let Some(record) = self.records.get(&key) {
            tracing::debug!("Record cache hit: {}", entry);
            return Ok(record);
        }

        let _slot = self.in_flight.acquire(&key).await;

        // Another caller may have filled the cache while we waited
        if let Some(record) = self.records.get(&key) {
            tracing::debug!("Record filled by concurrent lookup: {}", entry);
            return Ok(record);
        }

        tracing::info!("Fetching upstream pages for '{}'", entry);
        let inflection_url = self.upstream.inflection_url(entry);

        let (record, verb_forms) = tokio::join!(
            self.fetch_record(&dictionary_url),
            self.fetch_verb_forms(&inflection_url),
        );

        let mut record = record?;
        record.verb_forms = verb_forms;

        self.records.set(&key, record.clone());
        Ok(record)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Cambridge Dictionary".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Per-key async locks so concurrent misses on one key share a fetch.
#[derive(Default)]
struct InFlight {
    slots: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl InFlight {
    async fn acquire(&self, key: &str) -> InFlightSlot<'_> {
        let lock = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(slots.entry(key.to_string()).or_default())
        };

        let guard = Arc::clone(&lock).lock_owned().await;

        InFlightSlot {
            registry: self,
            key: key.to_string(),
            lock,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

struct InFlightSlot<'a> {
    registry: &'a InFlight,
    key: String,
    lock: Arc<tokio::sync::Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.guard.take();

        let mut slots = self.registry.slots.lock().unwrap_or_else(|e| e.into_inner());
        // Only the registry and this slot still point at the lock
        if Arc::strong_count(&self.lock) <= 2 {
            slots.remove(&self.key);
        }
    }
}
