use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

const ENTRY_PLACEHOLDER: &str = "{entry}";

fn default_dictionary_url_template() -> String {
    "https://dictionary.cambridge.org/us/dictionary/english/{entry}".to_string()
}

fn default_inflection_url_template() -> String {
    "https://simple.wiktionary.org/wiki/{entry}".to_string()
}

fn default_site_origin() -> String {
    "https://dictionary.cambridge.org".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36"
        .to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Where and how the two upstream pages are fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Primary dictionary page, `{entry}` is replaced by the looked-up word
    #[serde(default = "default_dictionary_url_template")]
    pub dictionary_url_template: String,
    /// Companion inflection-table page
    #[serde(default = "default_inflection_url_template")]
    pub inflection_url_template: String,
    /// Prefix for relative audio URLs found on the dictionary page
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            dictionary_url_template: default_dictionary_url_template(),
            inflection_url_template: default_inflection_url_template(),
            site_origin: default_site_origin(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self {
            dictionary_url_template: env_or(
                "DICTIONARY_URL_TEMPLATE",
                default_dictionary_url_template(),
            ),
            inflection_url_template: env_or(
                "INFLECTION_URL_TEMPLATE",
                default_inflection_url_template(),
            ),
            site_origin: env_or("DICTIONARY_ORIGIN", default_site_origin()),
            user_agent: env_or("UPSTREAM_USER_AGENT", default_user_agent()),
            timeout_ms: env_or("UPSTREAM_TIMEOUT_MS", default_timeout_ms()),
        }
    }

    pub fn dictionary_url(&self, entry: &str) -> String {
        self.dictionary_url_template.replace(ENTRY_PLACEHOLDER, entry)
    }

    pub fn inflection_url(&self, entry: &str) -> String {
        self.inflection_url_template.replace(ENTRY_PLACEHOLDER, entry)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
