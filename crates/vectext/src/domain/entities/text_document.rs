//! TextDocument - A piece of text together with its semantic vector
//!
//! Pure domain entity without infrastructure dependencies.

use serde::Serialize;

use crate::domain::errors::DomainError;

/// TextDocument - One ingested text, as persisted in the store
///
/// The field names are the persisted schema; stored documents carry
/// exactly `title`, `content`, `embedding` and `model`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDocument {
    pub title: String,
    pub content: String,
    /// Vector of `title + content`, length fixed by `model`
    pub embedding: Vec<f32>,
    /// Name of the embedding model that produced `embedding`
    pub model: String,
}

impl TextDocument {
    pub fn new(title: String, content: String, embedding: Vec<f32>, model: String) -> Self {
        Self {
            title,
            content,
            embedding,
            model,
        }
    }

    /// Text fed to the embedding model: title and content separated by a blank line.
    ///
    /// Vectors are only comparable across implementations that use this exact framing.
    pub fn compose_text(title: &str, content: &str) -> String {
        format!("{title}\n\n{content}")
    }

    /// Check that both ingestion inputs carry text
    pub fn validate_input(title: &str, content: &str) -> Result<(), DomainError> {
        if title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        if content.is_empty() {
            return Err(DomainError::Validation(
                "content must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of dimensions of the stored vector
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}
