pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AssistantService, ModelClient, CHAT_SYSTEM_PROMPT, SUMMARIZE_SYSTEM_PROMPT};

pub use cli::{Cli, ModelArgs, ProviderArg};

pub use connector::{
    build_router, AnthropicClient, ApiError, Container, ContainerConfig, MockChatClient,
    ModelBackend, OpenAiClient,
};

pub use domain::{
    ChatRequest, ChatResponse, ConfigError, DomainError, HealthStatus, ModelConfig, ProviderKind,
    SummarizeRequest, SummarizeResponse,
};
