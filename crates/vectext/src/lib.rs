//! Vectext Domain Library
//!
//! Core domain types and interfaces for ingesting text into a
//! vector-searchable document corpus.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): the `TextDocument` entity and `DomainError`
//! - **Ports** (`ports/`): collaborator interfaces
//!   - `repositories/`: document persistence (`TextRepository`)
//!   - `services/`: embedding generation (`EmbeddingService`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use vectext::{TextDocument, EmbeddingService, TextRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, TextDocument};
pub use ports::{EmbeddingService, TextRepository};
