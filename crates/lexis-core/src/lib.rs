pub mod cache;
pub mod dictionary;
pub mod error;
pub mod fetch;
pub mod normalize;

pub use cache::{Cache, TtlCache, cache_key};
pub use dictionary::{DictionarySource, SourceMetadata};
pub use error::{FetchError, LookupError};
pub use fetch::{FetchedPage, PageFetcher};
pub use normalize::{normalize_text, normalize_value};
