//! # Domain Layer
//!
//! Request/response models, model configuration and the error taxonomy.
//! This layer is independent of the HTTP server and of any provider API.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
