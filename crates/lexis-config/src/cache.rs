use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_ttl_secs() -> u64 {
    1800
}

fn default_max_entries() -> usize {
    1000
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Age after which an entry is stale
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// Entry count above which an insert triggers a sweep of stale entries
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self {
            ttl_secs: env_or("CACHE_TTL_SECS", default_ttl_secs()),
            max_entries: env_or("CACHE_MAX_ENTRIES", default_max_entries()),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
