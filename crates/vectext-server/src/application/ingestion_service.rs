//! Ingestion Application Service (Use Case)
//!
//! Turns a title and content into a stored, embedding-augmented document.

use std::sync::Arc;

use vectext::{DomainError, EmbeddingService, TextDocument, TextRepository};

/// Outcome of one successful ingestion
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedText {
    /// Identifier generated by the store
    pub id: String,
    pub title: String,
}

/// Application service for text ingestion
pub struct IngestionService {
    embedding: Arc<dyn EmbeddingService>,
    repo: Arc<dyn TextRepository>,
}

impl IngestionService {
    pub fn new(embedding: Arc<dyn EmbeddingService>, repo: Arc<dyn TextRepository>) -> Self {
        Self { embedding, repo }
    }

    /// Embed `title` and `content` together and persist them as one document
    pub async fn add_text(
        &self,
        title: String,
        content: String,
    ) -> Result<IngestedText, DomainError> {
        TextDocument::validate_input(&title, &content)?;

        let text = TextDocument::compose_text(&title, &content);
        let embedding = self.embedding.embed(&text).await?;

        let expected = self.embedding.dimensions();
        if embedding.len() != expected {
            return Err(DomainError::Embedding(format!(
                "{} returned {} dimensions, expected {}",
                self.embedding.model_name(),
                embedding.len(),
                expected
            )));
        }

        let document = TextDocument::new(
            title,
            content,
            embedding,
            self.embedding.model_name().to_string(),
        );
        let id = self.repo.insert(&document).await?;

        tracing::info!(
            "Ingested text: {} ({}) - {} dims",
            document.title,
            id,
            document.dimensions()
        );

        Ok(IngestedText {
            id,
            title: document.title,
        })
    }
}
