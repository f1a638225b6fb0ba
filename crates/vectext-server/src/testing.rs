//! In-memory fakes of the domain ports for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use vectext::{DomainError, EmbeddingService, TextDocument, TextRepository};

const FAKE_MODEL: &str = "all-MiniLM-L6-v2";
const FAKE_DIMENSIONS: usize = 384;

/// Deterministic embedding: the vector is filled with the text length
pub struct FakeEmbedding {
    output_len: usize,
    fail: bool,
    texts: Mutex<Vec<String>>,
}

impl FakeEmbedding {
    pub fn new() -> Self {
        Self::with_output_len(FAKE_DIMENSIONS)
    }

    /// Produce vectors of `output_len` while reporting 384 dimensions
    pub fn with_output_len(output_len: usize) -> Self {
        Self {
            output_len,
            fail: false,
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.texts.lock().unwrap().len()
    }
}

#[async_trait]
impl EmbeddingService for FakeEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        self.texts.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(DomainError::Embedding("model unavailable".to_string()));
        }
        Ok(vec![text.len() as f32; self.output_len])
    }

    fn model_name(&self) -> &str {
        FAKE_MODEL
    }

    fn dimensions(&self) -> usize {
        FAKE_DIMENSIONS
    }
}

/// Document store keeping everything in a Vec, with ObjectId-shaped ids
pub struct InMemoryTextRepository {
    next_id: AtomicUsize,
    fail: bool,
    documents: Mutex<Vec<(String, TextDocument)>>,
}

impl InMemoryTextRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(1),
            fail: false,
            documents: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn get(&self, id: &str) -> Option<TextDocument> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|(stored_id, _)| stored_id == id)
            .map(|(_, doc)| doc.clone())
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl TextRepository for InMemoryTextRepository {
    async fn insert(&self, document: &TextDocument) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::Repository(
                "connection closed by server".to_string(),
            ));
        }
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.documents
            .lock()
            .unwrap()
            .push((id.clone(), document.clone()));
        Ok(id)
    }
}
