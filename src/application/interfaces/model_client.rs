use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a system instruction plus one user message to an LLM and returns the
/// generated text.
///
/// Implementors encapsulate transport, serialization and vendor-specific API
/// details so that [`crate::application::AssistantService`] stays decoupled from
/// any particular provider or HTTP client library.
///
/// Implementations must be safe to call from many requests at once. Each call
/// issues exactly one outbound provider request and never retries; every
/// failure, including a timeout, is reported as [`DomainError::Provider`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// The returned text is the model output as received, without trimming.
    async fn generate(&self, system_prompt: &str, user_text: &str) -> Result<String, DomainError>;
}
