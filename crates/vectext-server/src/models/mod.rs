//! Vectext Data Models
//!
//! Request/response DTOs of the HTTP API.

mod text;

pub use text::*;
