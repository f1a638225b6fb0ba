//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod text_repository;

pub use text_repository::*;
