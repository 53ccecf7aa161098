use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};

pub const DEFAULT_TTL: Duration = Duration::from_secs(1800);
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Time-bounded key/value store sitting in front of upstream fetches.
pub trait Cache<V>: Send + Sync {
    /// Fresh payload for `key`, or `None`. A stale entry is removed.
    fn get(&self, key: &str) -> Option<V>;

    /// Insert or overwrite `key`, stamped with the current time.
    fn set(&self, key: &str, value: V);

    /// Remove every entry older than the TTL, returning how many went.
    fn sweep(&self) -> usize;
}

/// Derive a cache key from a URL by replacing every character outside
/// `[A-Za-z0-9]` with `_`.
///
/// Lossy: `a-b` and `a.b` map to the same key.
pub fn cache_key(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

struct CacheEntry<V> {
    payload: V,
    stored_at: Instant,
}

/// In-process [`Cache`] with write-triggered sweeping.
///
/// Entries expire on read once their age reaches the TTL. Stale entries
/// that are never read again are only dropped when an insert pushes the
/// entry count past `max_entries`, so they can outlive the TTL on a quiet
/// cache.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    max_entries: usize,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TTL, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_limits(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        let mut entries = self.lock();

        if let Some(entry) = entries.get(key) {
            if now.saturating_duration_since(entry.stored_at) < self.ttl {
                return Some(entry.payload.clone());
            }
            entries.remove(key);
            tracing::debug!("Cache entry expired: {}", key);
        }

        None
    }

    pub(crate) fn set_at(&self, key: &str, value: V, now: Instant) {
        let mut entries = self.lock();

        entries.insert(
            key.to_string(),
            CacheEntry {
                payload: value,
                stored_at: now,
            },
        );

        if entries.len() > self.max_entries {
            let removed = Self::sweep_locked(&mut entries, self.ttl, now);
            tracing::debug!(
                "Cache grew past {} entries, swept {} stale",
                self.max_entries,
                removed
            );
        }
    }

    pub(crate) fn sweep_at(&self, now: Instant) -> usize {
        Self::sweep_locked(&mut self.lock(), self.ttl, now)
    }

    fn sweep_locked(
        entries: &mut HashMap<String, CacheEntry<V>>,
        ttl: Duration,
        now: Instant,
    ) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| now.saturating_duration_since(entry.stored_at) <= ttl);
        before - entries.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.lock()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send> Cache<V> for TtlCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    fn set(&self, key: &str, value: V) {
        self.set_at(key, value, Instant::now())
    }

    fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }
}
