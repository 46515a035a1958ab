//! Extraction handlers
//!
//! Single-text extraction and the batch variant. Extraction is CPU-bound
//! (regex scans, possibly a blocking sidecar call), so handlers offload it
//! to the blocking thread pool instead of stalling the async runtime.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use scry_core::ExtractionResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Single-text extraction request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// The text to extract entities from
    pub text: String,
}

/// Batch extraction request.
///
/// Entries are arbitrary JSON values on purpose: non-string and empty
/// entries get a placeholder result instead of failing the whole batch.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchRequest {
    #[schema(value_type = Vec<String>)]
    pub texts: Vec<serde_json::Value>,
}

/// Batch extraction response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchResponse {
    pub results: Vec<ExtractionResult>,
    /// Number of results; always equals the number of submitted entries
    pub count: usize,
}

/// Extract entities from one text
#[utoipa::path(
    post,
    path = "/ner/extract",
    tag = "ner",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction result", body = ExtractionResult),
        (status = 400, description = "Missing or empty text", body = crate::error::ApiError)
    )
)]
pub async fn extract_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    if request.text.is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let extractor = state.extractor.clone();
    let text = request.text;
    let result = tokio::task::spawn_blocking(move || extractor.extract(&text))
        .await
        .map_err(|e| AppError::Internal(format!("extraction task failed: {e}")))??;

    Ok(Json(result))
}

/// Extract entities from a list of texts.
///
/// Positional: `results[i]` always corresponds to `texts[i]`. Invalid
/// entries (non-strings, empty strings) yield the fixed placeholder result
/// in place rather than a request-level error.
#[utoipa::path(
    post,
    path = "/ner/batch",
    tag = "ner",
    request_body = BatchRequest,
    responses(
        (status = 200, description = "Per-entry extraction results", body = BatchResponse)
    )
)]
pub async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let extractor = state.extractor.clone();
    let texts = request.texts;
    let results = tokio::task::spawn_blocking(move || {
        texts
            .iter()
            .map(|entry| match entry.as_str() {
                Some(text) if !text.is_empty() => extractor.extract(text),
                Some(text) => Ok(ExtractionResult::invalid_text(text)),
                None => Ok(ExtractionResult::invalid_text("")),
            })
            .collect::<scry_core::Result<Vec<_>>>()
    })
    .await
    .map_err(|e| AppError::Internal(format!("extraction task failed: {e}")))??;

    let count = results.len();
    Ok(Json(BatchResponse { results, count }))
}
