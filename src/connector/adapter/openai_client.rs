use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider_http::{build_http_client, read_success_body, send_error};
use crate::application::ModelClient;
use crate::domain::{ConfigError, DomainError, ModelConfig};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const CLIENT_NAME: &str = "OpenAiClient";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`ModelClient`] for the OpenAI Chat Completions API and compatible servers.
///
/// Model, temperature, max tokens and timeout are fixed at construction from
/// the [`ModelConfig`]. Set a base URL on the config to target any
/// OpenAI-compatible endpoint (a local inference server, a proxy).
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(config: &ModelConfig) -> Result<Self, ConfigError> {
        let base = config.base_url().unwrap_or(DEFAULT_OPENAI_BASE_URL);
        Ok(Self {
            client: build_http_client(config.timeout())?,
            api_key: config.api_key().to_string(),
            model: config.model_name().to_string(),
            temperature: config.temperature(),
            max_tokens: config.max_tokens(),
            timeout: config.timeout(),
            url: format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn extract_content(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::provider(format!("{CLIENT_NAME}: failed to parse response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                DomainError::provider(format!("{CLIENT_NAME}: response contained no message content"))
            })
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn generate(&self, system_prompt: &str, user_text: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: [
                ApiMessage {
                    role: "system",
                    content: system_prompt,
                },
                ApiMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            "{CLIENT_NAME} request: model={} temperature={} max_tokens={} user={}",
            self.model, self.temperature, self.max_tokens, user_text
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(CLIENT_NAME, e, self.timeout))?;

        let body = read_success_body(CLIENT_NAME, response, self.timeout).await?;
        Self::extract_content(&body)
    }
}
