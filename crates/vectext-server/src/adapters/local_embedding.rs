//! FastEmbed implementation of EmbeddingService
//!
//! Runs all-MiniLM-L6-v2 locally through ONNX Runtime (384 dimensions).
//!
//! The model is owned by a single actor thread. Request tasks send texts
//! over a channel and await the reply, so inference is serialized and never
//! runs on the async worker threads.

use std::path::PathBuf;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tokio::sync::{mpsc, oneshot};

use vectext::{DomainError, EmbeddingService};

pub const MODEL_NAME: &str = "all-MiniLM-L6-v2";
pub const MODEL_DIMENSIONS: usize = 384;

/// Pending requests beyond this wait on the sender side
const QUEUE_CAPACITY: usize = 100;

struct EmbedMessage {
    text: String,
    reply: oneshot::Sender<Result<Vec<f32>, DomainError>>,
}

/// Local embedding service backed by fastembed
#[derive(Clone)]
pub struct FastEmbedService {
    sender: mpsc::Sender<EmbedMessage>,
}

impl FastEmbedService {
    /// Load the model (downloading it on first use) and start the actor.
    ///
    /// Resolves only once the model is ready to serve.
    pub async fn load(cache_dir: Option<PathBuf>) -> Result<Self, DomainError> {
        let mut options =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(true);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(dir);
        }

        let model = tokio::task::spawn_blocking(move || TextEmbedding::try_new(options))
            .await
            .map_err(|e| DomainError::Embedding(format!("Model loader task failed: {e}")))?
            .map_err(|e| DomainError::Embedding(format!("Failed to load {MODEL_NAME}: {e}")))?;

        let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
        std::thread::Builder::new()
            .name("fastembed-actor".to_string())
            .spawn(move || run_actor(model, receiver))
            .map_err(|e| DomainError::Embedding(format!("Failed to start embedding actor: {e}")))?;

        tracing::info!("🧬 Embedding model loaded: {}", MODEL_NAME);

        Ok(Self { sender })
    }
}

fn run_actor(mut model: TextEmbedding, mut receiver: mpsc::Receiver<EmbedMessage>) {
    while let Some(EmbedMessage { text, reply }) = receiver.blocking_recv() {
        let result = model
            .embed(vec![text], None)
            .map_err(|e| DomainError::Embedding(format!("FastEmbed embedding failed: {e}")))
            .and_then(|vectors| {
                vectors
                    .into_iter()
                    .next()
                    .ok_or_else(|| DomainError::Embedding("No embedding returned".to_string()))
            });

        // Receiver gone means the request was dropped; nothing to report
        let _ = reply.send(result);
    }

    tracing::info!("Embedding actor stopped");
}

#[async_trait]
impl EmbeddingService for FastEmbedService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let (reply, response) = oneshot::channel();

        self.sender
            .send(EmbedMessage {
                text: text.to_string(),
                reply,
            })
            .await
            .map_err(|_| DomainError::Embedding("Embedding actor closed".to_string()))?;

        response
            .await
            .map_err(|_| DomainError::Embedding("Embedding actor dropped request".to_string()))?
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }

    fn dimensions(&self) -> usize {
        MODEL_DIMENSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Downloads the ONNX model on first run
    async fn test_embeds_to_384_dimensions() {
        let service = FastEmbedService::load(None).await.unwrap();

        let vector = service.embed("Hello\n\nWorld").await.unwrap();

        assert_eq!(vector.len(), MODEL_DIMENSIONS);
        assert_eq!(service.model_name(), "all-MiniLM-L6-v2");
    }

    #[tokio::test]
    #[ignore] // Downloads the ONNX model on first run
    async fn test_same_text_same_vector() {
        let service = FastEmbedService::load(None).await.unwrap();

        let a = service.embed("repeatable").await.unwrap();
        let b = service.embed("repeatable").await.unwrap();

        assert_eq!(a, b);
    }
}
