use serde::{Deserialize, Serialize};

/// Normalized vocabulary record served to clients.
///
/// Every `id` in the nested lists is a dense 0-based position local to its
/// list. They are renumbered on each extraction and carry no identity
/// across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    pub word: String,
    /// Unique, in first-seen order
    #[serde(rename = "pos")]
    pub parts_of_speech: Vec<String>,
    #[serde(rename = "verbs")]
    pub verb_forms: Vec<VerbForm>,
    #[serde(rename = "pronunciation")]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(rename = "definition")]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForm {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(rename = "pos")]
    pub part_of_speech: String,
    /// Region label such as "uk" or "us"
    #[serde(rename = "lang")]
    pub region: String,
    /// Absolute audio URL, or empty when the page has no audio source
    #[serde(rename = "url")]
    pub audio_url: String,
    #[serde(rename = "pron")]
    pub transcription: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: usize,
    #[serde(rename = "pos")]
    pub part_of_speech: String,
    #[serde(rename = "source")]
    pub source_id: String,
    pub text: String,
    /// Always empty for this source
    pub translation: String,
    #[serde(rename = "example")]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub id: usize,
    pub text: String,
    pub translation: String,
}

/// Body of every non-success API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
