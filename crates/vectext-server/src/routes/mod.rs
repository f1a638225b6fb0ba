//! Vectext API Routes
//!
//! - / - Liveness message
//! - /add-text - Embed and store a text document
//! - /swagger-ui - Interactive API documentation

pub mod health;
pub mod swagger;
pub mod text;
