use std::sync::Arc;

use lexis_core::DictionarySource;

pub struct AppState {
    pub source: Arc<dyn DictionarySource>,
}

impl AppState {
    pub fn new(source: Arc<dyn DictionarySource>) -> Self {
        Self { source }
    }
}
