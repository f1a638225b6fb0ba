//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod local_embedding;
pub mod mongo;

// Re-exports
pub use local_embedding::FastEmbedService;
pub use mongo::MongoTextRepository;
