use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use lexis_config::cache::CacheConfig;
use lexis_config::upstream::UpstreamConfig;
use lexis_core::{
    DictionarySource, FetchError, FetchedPage, LookupError, PageFetcher, SourceMetadata,
};
use lexis_lang_english::EnglishDictionary;
use lexis_types::DictionaryRecord;
use tower::ServiceExt;

use crate::routes::router;
use crate::state::AppState;

/// Canned lookup results, remembering which entries were asked for
struct StubSource {
    results: HashMap<String, Result<DictionaryRecord, LookupError>>,
    seen: Mutex<Vec<String>>,
}

impl StubSource {
    fn new(results: Vec<(&str, Result<DictionaryRecord, LookupError>)>) -> Self {
        Self {
            results: results
                .into_iter()
                .map(|(entry, result)| (entry.to_string(), result))
                .collect(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DictionarySource for StubSource {
    async fn lookup(&self, entry: &str) -> Result<DictionaryRecord, LookupError> {
        self.seen.lock().unwrap().push(entry.to_string());
        self.results
            .get(entry)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound(entry.to_string())))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "stub".to_string(),
            language: "en".to_string(),
        }
    }
}

fn app(source: Arc<dyn DictionarySource>) -> Router {
    router(Arc::new(AppState::new(source)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn record(word: &str) -> DictionaryRecord {
    DictionaryRecord {
        word: word.to_string(),
        parts_of_speech: vec!["verb".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_success_returns_record_json() {
    let source = Arc::new(StubSource::new(vec![("run", Ok(record("run")))]));

    let (status, body) = get(app(source.clone()), "/api/dictionary/%20RUN%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "run");
    assert_eq!(body["pos"][0], "verb");
    assert_eq!(body["verbs"], serde_json::json!([]));
    assert_eq!(body["pronunciation"], serde_json::json!([]));
    assert_eq!(body["definition"], serde_json::json!([]));
    assert_eq!(*source.seen.lock().unwrap(), ["run"]);
}

#[tokio::test]
async fn test_invalid_entry_is_bad_request() {
    let source = Arc::new(StubSource::new(vec![]));

    for uri in [
        "/api/dictionary/%20%20",
        "/api/dictionary/",
        "/api/dictionary/a%3Cb",
        "/api/dictionary/%FF",
    ] {
        let (status, body) = get(app(source.clone()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body, serde_json::json!({ "error": "Invalid entry parameter" }));
    }
    assert!(source.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let source = Arc::new(StubSource::new(vec![]));

    let (status, body) = get(app(source), "/api/dictionary/qwxz").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "Word not found" }));
}

#[tokio::test]
async fn test_fetch_failure_maps_to_500_without_detail() {
    let source = Arc::new(StubSource::new(vec![(
        "run",
        Err(LookupError::Fetch(FetchError::Transport(
            "dns error: secret.internal".to_string(),
        ))),
    )]));

    let (status, body) = get(app(source), "/api/dictionary/run").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_health_reports_source() {
    let source = Arc::new(StubSource::new(vec![]));

    let (status, body) = get(app(source), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok", "source": "stub" }));
}

/// Upstream where only the dictionary page answers
struct DictionaryOnlyFetcher {
    dictionary_url: String,
}

#[async_trait]
impl PageFetcher for DictionaryOnlyFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        if url == self.dictionary_url {
            Ok(FetchedPage {
                status: 200,
                body: r#"<div class="pr entry-body__el" data-source="cald4">
                    <div class="pos-header">
                      <span class="headword">run</span>
                      <div class="posgram"><span class="pos">verb</span></div>
                      <span class="dpron-i"><span class="region">us</span><span class="pron">/rʌn/</span></span>
                    </div>
                    <div class="def-block"><div class="def">to move fast</div>
                      <div class="examp">She ran home.</div></div>
                  </div>"#
                    .to_string(),
            })
        } else {
            Err(FetchError::Timeout)
        }
    }
}

#[tokio::test]
async fn test_end_to_end_with_failing_companion_page() {
    let upstream = UpstreamConfig::default();
    let fetcher = Arc::new(DictionaryOnlyFetcher {
        dictionary_url: upstream.dictionary_url("run"),
    });
    let source = Arc::new(EnglishDictionary::new(
        fetcher,
        upstream,
        CacheConfig::default(),
    ));

    let (status, body) = get(app(source), "/api/dictionary/Run").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "run");
    assert_eq!(body["verbs"], serde_json::json!([]));
    assert_eq!(body["pronunciation"][0]["lang"], "us");
    assert_eq!(body["pronunciation"][0]["url"], "");
    assert_eq!(body["definition"][0]["source"], "cald4");
    assert_eq!(body["definition"][0]["example"][0]["id"], 0);
    assert_eq!(body["definition"][0]["example"][0]["text"], "She ran home.");
}
