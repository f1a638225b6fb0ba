//! Service Ports
//!
//! Abstract interfaces for external services.

mod embedding;

pub use embedding::*;
