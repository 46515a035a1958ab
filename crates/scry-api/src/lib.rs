//! Scry API - REST server for entity extraction
//!
//! Exposes the extraction pipeline over HTTP: single-text extraction, batch
//! extraction, the label vocabulary, and a health probe, plus a Swagger UI
//! for the OpenAPI description.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::{http::HeaderValue, routing::get, Router};
use scry_core::ServerConfig;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::extract::extract_handler,
        handlers::extract::batch_handler,
        handlers::labels::types_handler,
    ),
    components(schemas(
        handlers::health::HealthResponse,
        handlers::extract::ExtractRequest,
        handlers::extract::BatchRequest,
        handlers::extract::BatchResponse,
        handlers::labels::TypesResponse,
        error::ApiError,
        scry_core::Entity,
        scry_core::EntityLabel,
        scry_core::ExtractionResult,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "ner", description = "Entity extraction")
    ),
    info(
        title = "Scry API",
        description = "Named-entity extraction for OSINT investigations"
    )
)]
pub struct ApiDoc;

/// Build the full application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(routes::api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}

fn cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    if !config.cors_enabled {
        return None;
    }

    let layer = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Some(layer)
}

/// Router with default config and no model, for integration tests
pub fn create_router_for_testing() -> Router {
    create_router(Arc::new(AppState::default()))
}

/// Router with an injected model handle, for integration tests
pub fn create_router_with_model(model: Arc<dyn scry_extractor::NerModel>) -> Router {
    create_router(Arc::new(AppState::new(
        scry_core::AppConfig::default(),
        Some(model),
    )))
}
