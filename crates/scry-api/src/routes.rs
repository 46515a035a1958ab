//! API route definitions

use crate::handlers::{extract, labels};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create the NER API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ner/extract", post(extract::extract_handler))
        .route("/ner/batch", post(extract::batch_handler))
        .route("/ner/types", get(labels::types_handler))
}
