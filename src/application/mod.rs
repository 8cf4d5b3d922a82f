//! # Application Layer
//!
//! The model client interface and the assistant use case built on top of it.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
