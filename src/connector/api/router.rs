use axum::routing::{get, post};

use super::container::Container;
use super::controller::{chat, health, summarize};

pub const CHAT_PATH: &str = "/api/chat";
pub const SUMMARIZE_PATH: &str = "/api/chat/summarize";
pub const HEALTH_PATH: &str = "/api/chat/health";

pub fn build_router(container: Container) -> axum::Router {
    axum::Router::new()
        .route(CHAT_PATH, post(chat))
        .route(SUMMARIZE_PATH, post(summarize))
        .route(HEALTH_PATH, get(health))
        .with_state(container)
}
