//! Liveness route

use axum::Json;

use crate::models::ServiceStatus;

/// Service liveness message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceStatus)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        message: "MongoDB Vector Search API is running!".to_string(),
    })
}
