pub mod assembler;
pub mod dictionary;
pub mod inflection;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assembler::EnglishDictionary;
pub use dictionary::DictionaryPageExtractor;
pub use inflection::extract_verb_forms;
