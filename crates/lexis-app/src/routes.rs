use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use lexis_core::LookupError;
use lexis_types::{DictionaryRecord, ErrorBody};
use serde_json::json;

use crate::state::AppState;

const MAX_ENTRY_CHARS: usize = 64;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/dictionary/{entry}", get(lookup_entry))
        .route("/api/dictionary/", get(missing_entry))
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let metadata = state.source.metadata();
    Json(json!({ "status": "ok", "source": metadata.name }))
}

async fn lookup_entry(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DictionaryRecord>, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        tracing::debug!("Rejected entry path: {}", rejection);
        ApiError::InvalidEntry
    })?;
    let entry = normalize_entry(&raw).ok_or(ApiError::InvalidEntry)?;

    let result = state.source.lookup(&entry).await;
    let record = result.map_err(|source| ApiError::Lookup { entry, source })?;

    Ok(Json(record))
}

async fn missing_entry() -> ApiError {
    ApiError::InvalidEntry
}

/// Trim and lowercase, rejecting anything that cannot be a dictionary entry
pub(crate) fn normalize_entry(raw: &str) -> Option<String> {
    let entry = raw.trim().to_lowercase();

    let valid = !entry.is_empty()
        && entry.chars().count() <= MAX_ENTRY_CHARS
        && entry
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '\''));

    valid.then_some(entry)
}

#[derive(Debug)]
pub enum ApiError {
    InvalidEntry,
    Lookup { entry: String, source: LookupError },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidEntry => (StatusCode::BAD_REQUEST, "Invalid entry parameter"),
            ApiError::Lookup { entry, source } if source.is_not_found() => {
                tracing::warn!("Lookup of '{}' found nothing: {}", entry, source);
                (StatusCode::NOT_FOUND, "Word not found")
            }
            ApiError::Lookup { entry, source } => {
                tracing::error!("Lookup of '{}' failed: {}", entry, source);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
