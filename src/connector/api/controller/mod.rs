pub mod chat_controller;
pub mod health_controller;

pub use chat_controller::{chat, summarize, CHAT_FAILURE, SUMMARIZE_FAILURE};
pub use health_controller::health;
