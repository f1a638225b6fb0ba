//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the embedding model and the document store.

mod ingestion_service;

pub use ingestion_service::{IngestedText, IngestionService};
