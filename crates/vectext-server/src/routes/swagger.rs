//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{AddTextRequest, AddTextResponse, ServiceStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::root,
        super::text::add_text,
    ),
    components(
        schemas(
            AddTextRequest,
            AddTextResponse,
            ErrorResponse,
            ServiceStatus,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Texts", description = "Text ingestion with sentence embeddings"),
    ),
    info(
        title = "MongoDB Vector Search API",
        description = "Stores texts together with all-MiniLM-L6-v2 embeddings",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/add-text"));
    }
}
