//! Text ingestion DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Add text request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTextRequest {
    pub title: String,
    pub content: String,
}

/// Add text response
#[derive(Debug, Serialize, ToSchema)]
pub struct AddTextResponse {
    /// Identifier generated by the document store
    pub inserted_id: String,
    pub title: String,
}

/// Service liveness message
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub message: String,
}
