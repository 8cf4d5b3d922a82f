pub mod container;
pub mod controller;
pub mod error;
pub mod router;

pub use container::{Container, ContainerConfig, ModelBackend};
pub use error::ApiError;
pub use router::{build_router, CHAT_PATH, HEALTH_PATH, SUMMARIZE_PATH};
