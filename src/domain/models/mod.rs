mod chat;
mod model_config;
mod provider;

pub use chat::*;
pub use model_config::*;
pub use provider::*;
