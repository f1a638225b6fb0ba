//! Text Repository Port
//!
//! Abstract interface for TextDocument persistence.
//! Documents are append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, TextDocument};

/// Repository interface for TextDocument entities
#[async_trait]
pub trait TextRepository: Send + Sync {
    /// Insert a document and return the identifier generated by the store
    async fn insert(&self, document: &TextDocument) -> Result<String, DomainError>;
}
