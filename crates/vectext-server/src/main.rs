use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{FastEmbedService, MongoTextRepository};
use application::IngestionService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<IngestionService>,
}

/// Assemble every route around the shared state
pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/", get(routes::health::root))
        .merge(routes::text::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Vectext API initializing...");

    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // Document store
    let repository = MongoTextRepository::connect(
        &config.mongodb_uri,
        &config.db_name,
        &config.text_collection,
    )
    .await?;

    match repository.ping().await {
        Ok(()) => tracing::info!(
            "🍃 MongoDB connected: {}.{}",
            config.db_name,
            repository.collection_name()
        ),
        Err(e) => tracing::warn!("⚠️  MongoDB ping failed, continuing: {}", e),
    }

    // Embedding model (blocks readiness until loaded)
    let embedding = FastEmbedService::load(config.model_cache_dir.clone())
        .await
        .context("Failed to load embedding model")?;

    let state = AppState {
        ingestion: Arc::new(IngestionService::new(
            Arc::new(embedding),
            Arc::new(repository),
        )),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Vectext API ready on {}", config.bind_addr);

    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
