//! Label vocabulary handler

use axum::{response::IntoResponse, Json};
use scry_core::EntityLabel;
use serde::Serialize;
use utoipa::ToSchema;

/// The fixed label vocabulary
#[derive(Serialize, ToSchema)]
pub struct TypesResponse {
    pub types: Vec<&'static str>,
}

/// List every entity label the system can emit. Static; independent of
/// whether a model is loaded.
#[utoipa::path(
    get,
    path = "/ner/types",
    tag = "ner",
    responses(
        (status = 200, description = "Supported entity labels", body = TypesResponse)
    )
)]
pub async fn types_handler() -> impl IntoResponse {
    Json(TypesResponse {
        types: EntityLabel::all().iter().map(|l| l.as_str()).collect(),
    })
}
