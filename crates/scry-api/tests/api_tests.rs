//! API Integration Tests
//!
//! Exercised in-process through `tower::ServiceExt::oneshot`; no network,
//! no model sidecar. Model-dependent paths use a stub implementation of
//! the model trait.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use scry_api::{create_router_for_testing, create_router_with_model};
use scry_core::{EntityLabel, Result};
use scry_extractor::{ModelSpan, NerModel};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to create a test request
fn create_json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    match body {
        Some(json_body) => builder
            .body(Body::from(serde_json::to_string(&json_body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Stub model that tags every occurrence of "Alice" as a person
struct StubModel;

impl NerModel for StubModel {
    fn recognize(&self, text: &str) -> Result<Vec<ModelSpan>> {
        Ok(text
            .match_indices("Alice")
            .map(|(start, needle)| ModelSpan {
                text: needle.to_string(),
                label: EntityLabel::Person,
                start,
                end: start + needle.len(),
            })
            .collect())
    }

    fn id(&self) -> &str {
        "stub-model"
    }
}

// =============================================================================
// Health Check Tests
// =============================================================================

#[tokio::test]
async fn test_health_check_without_model() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(create_json_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["model_loaded"], false);
    assert_eq!(json["model"], "none");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_check_with_model() {
    let app = create_router_with_model(Arc::new(StubModel));

    let response = app
        .oneshot(create_json_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["model_loaded"], true);
    assert_eq!(json["model"], "stub-model");
}

// =============================================================================
// Types Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_types_lists_full_vocabulary() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(create_json_request("GET", "/ner/types", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let types = json["types"].as_array().unwrap();
    assert_eq!(types.len(), 23);
    assert!(types.contains(&json!("PERSON")));
    assert!(types.contains(&json!("WORK_OF_ART")));
    assert!(types.contains(&json!("CRYPTO_ADDRESS")));
}

// =============================================================================
// Extract Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_extract_combines_model_and_patterns() {
    let app = create_router_with_model(Arc::new(StubModel));

    let request = create_json_request(
        "POST",
        "/ner/extract",
        Some(json!({"text": "Alice wrote to bob@example.com or 555-123-4567"})),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["model"], "stub-model");
    assert!(json.get("error").is_none());

    let entities = json["entities"].as_array().unwrap();
    assert_eq!(entities.len(), 3);
    assert_eq!(entities[0]["label"], "PERSON");
    assert_eq!(entities[0]["text"], "Alice");
    assert_eq!(entities[1]["label"], "EMAIL");
    assert_eq!(entities[2]["label"], "PHONE");
    assert!(entities[1]["confidence"].is_number());
    assert!(entities[1]["start"].is_number());

    assert_eq!(json["entity_counts"]["PERSON"], 1);
    assert_eq!(json["entity_counts"]["EMAIL"], 1);
    assert_eq!(json["entity_counts"]["PHONE"], 1);
}

#[tokio::test]
async fn test_extract_degrades_without_model() {
    let app = create_router_for_testing();

    let request = create_json_request(
        "POST",
        "/ner/extract",
        Some(json!({"text": "mail bob@example.com"})),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["model"], "none");
    assert_eq!(json["error"], "NER model not loaded");
    // The degraded path skips pattern matching too
    assert_eq!(json["entities"].as_array().unwrap().len(), 0);
    assert_eq!(json["entity_counts"].as_object().unwrap().len(), 0);
}

#[tokio::test]
async fn test_extract_rejects_empty_text() {
    let app = create_router_with_model(Arc::new(StubModel));

    let request = create_json_request("POST", "/ner/extract", Some(json!({"text": ""})));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_extract_rejects_missing_text_field() {
    let app = create_router_with_model(Arc::new(StubModel));

    let request = create_json_request("POST", "/ner/extract", Some(json!({})));
    let response = app.oneshot(request).await.unwrap();
    // Missing field fails JSON deserialization before the handler runs
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Batch Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_batch_preserves_order_and_substitutes_placeholders() {
    let app = create_router_with_model(Arc::new(StubModel));

    let request = create_json_request(
        "POST",
        "/ner/batch",
        Some(json!({"texts": ["Alice is here", "", 42, "ping 10.0.0.1"]})),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["count"], 4);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);

    // Valid entry
    assert_eq!(results[0]["entities"][0]["label"], "PERSON");
    assert!(results[0].get("error").is_none());

    // Empty string and non-string entries get the fixed placeholder
    for invalid in [&results[1], &results[2]] {
        assert_eq!(invalid["error"], "Invalid text");
        assert_eq!(invalid["model"], "none");
        assert_eq!(invalid["entities"].as_array().unwrap().len(), 0);
    }

    // Valid entry after invalid ones still processed
    assert_eq!(results[3]["entities"][0]["label"], "IP_ADDRESS");
    assert_eq!(results[3]["entity_counts"]["IP_ADDRESS"], 1);
}

#[tokio::test]
async fn test_batch_empty_list() {
    let app = create_router_with_model(Arc::new(StubModel));

    let request = create_json_request("POST", "/ner/batch", Some(json!({"texts": []})));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

// =============================================================================
// OpenAPI / Swagger Tests
// =============================================================================

#[tokio::test]
async fn test_openapi_spec_available() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(create_json_request("GET", "/api-docs/openapi.json", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["paths"]["/ner/extract"].is_object());
    assert!(json["paths"]["/ner/batch"].is_object());
    assert!(json["paths"]["/ner/types"].is_object());
    assert!(json["paths"]["/health"].is_object());
}

#[tokio::test]
async fn test_swagger_ui_served() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(create_json_request("GET", "/swagger-ui/", None))
        .await
        .unwrap();
    assert!(
        response.status() == StatusCode::OK
            || response.status() == StatusCode::MOVED_PERMANENTLY
    );
}
