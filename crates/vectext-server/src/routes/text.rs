//! Text Routes - Ingestion
//!
//! HTTP handlers that delegate to IngestionService for business logic.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddTextRequest, AddTextResponse};
use crate::AppState;

/// Embed a text and store it as a document
#[utoipa::path(
    post,
    path = "/add-text",
    request_body = AddTextRequest,
    responses(
        (status = 200, description = "Document stored", body = AddTextResponse),
        (status = 422, description = "Missing, mistyped or empty field", body = ErrorResponse),
        (status = 500, description = "Embedding or storage failure", body = ErrorResponse)
    ),
    tag = "Texts"
)]
pub async fn add_text(
    State(state): State<AppState>,
    payload: Result<Json<AddTextRequest>, JsonRejection>,
) -> Result<Json<AddTextResponse>, ApiError> {
    let Json(payload) = payload?;

    let ingested = state
        .ingestion
        .add_text(payload.title, payload.content)
        .await?;

    Ok(Json(AddTextResponse {
        inserted_id: ingested.id,
        title: ingested.title,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/add-text", post(add_text))
}
