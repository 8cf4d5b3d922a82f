//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Model clients (OpenAI, Anthropic, in-process mock)
//! - HTTP API (axum router, controllers, bootstrap container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
