mod types;

pub use types::{Definition, DictionaryRecord, ErrorBody, Example, Pronunciation, VerbForm};
