use serde::{Deserialize, Serialize};

use self::cache::CacheConfig;
use self::server::ServerConfig;
use self::upstream::UpstreamConfig;

pub mod cache;
pub mod server;
pub mod upstream;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cache: CacheConfig,
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            upstream: UpstreamConfig::new(),
            cache: CacheConfig::new(),
        }
    }
}

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
