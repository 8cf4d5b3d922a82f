use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::application::ModelClient;
use crate::domain::DomainError;

/// Steers the model towards short, direct conversational answers.
pub const CHAT_SYSTEM_PROMPT: &str = "\
You are a friendly, professional AI assistant. Answer the user's question \
in the language they wrote in. Keep your answers concise and accurate.";

/// Asks for a summary of roughly 100 characters. The limit is an instruction to
/// the model only; the output is returned as-is.
pub const SUMMARIZE_SYSTEM_PROMPT: &str = "\
Summarize the following text concisely, in the language it is written in, \
using no more than 100 characters.";

/// Binds the two fixed system prompts to a [`ModelClient`].
///
/// Holds no per-request state, so one instance is shared across all requests.
/// Input validation happens in the HTTP layer before this is reached.
pub struct AssistantService {
    model_client: Arc<dyn ModelClient>,
}

impl AssistantService {
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    pub async fn chat(&self, user_text: &str) -> Result<String, DomainError> {
        self.generate("chat", CHAT_SYSTEM_PROMPT, user_text).await
    }

    pub async fn summarize(&self, user_text: &str) -> Result<String, DomainError> {
        self.generate("summarize", SUMMARIZE_SYSTEM_PROMPT, user_text).await
    }

    async fn generate(
        &self,
        operation: &str,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, DomainError> {
        let start_time = Instant::now();
        let output = self.model_client.generate(system_prompt, user_text).await?;
        debug!(
            "{} completed in {:?} ({} chars in, {} chars out)",
            operation,
            start_time.elapsed(),
            user_text.chars().count(),
            output.chars().count()
        );
        Ok(output)
    }
}
