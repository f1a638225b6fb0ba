//! Domain Entities
//!
//! - TextDocument: title, content and the embedding computed from both

mod text_document;

pub use text_document::*;
