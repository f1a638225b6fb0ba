//! API error boundary
//!
//! Every failure leaving a handler passes through `ApiError`. Rejected
//! payloads keep their own status; anything else becomes a 500 whose
//! `detail` carries the underlying cause.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use vectext::DomainError;

/// Error body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be accepted
    Rejected { status: StatusCode, detail: String },
    /// Any failure inside the ingestion pipeline
    Internal(DomainError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Rejected {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: msg,
            },
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Rejected { status, detail } => {
                tracing::debug!(%status, "Request rejected: {}", detail);
                (status, detail)
            }
            Self::Internal(err) => {
                tracing::error!(kind = err.kind(), "Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
