//! Scry API Server
//!
//! REST API server for OSINT entity extraction.

use scry_api::{create_router, state::AppState};
use scry_core::AppConfig;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().unwrap_or_default();

    // Initialize tracing; LOG_LEVEL from config is the fallback when
    // RUST_LOG is unset
    let default_filter = format!(
        "scry_api={level},tower_http={level}",
        level = config.logging.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Initialize the model capability before accepting traffic. A missing
    // model is non-fatal: the service starts and serves degraded results.
    let model = scry_extractor::build_model(&config.model);
    match &model {
        Some(model) => tracing::info!(model = model.id(), "NER model loaded"),
        None => tracing::warn!("no NER model configured, serving degraded results"),
    }

    let state = Arc::new(AppState::new(config, model));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Scry API server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    tracing::info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
