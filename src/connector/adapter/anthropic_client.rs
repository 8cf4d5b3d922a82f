use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::provider_http::{build_http_client, read_success_body, send_error};
use crate::application::ModelClient;
use crate::domain::{ConfigError, DomainError, ModelConfig};

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const CLIENT_NAME: &str = "AnthropicClient";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// Non-text blocks (tool use, thinking) carry no `text` and are skipped.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the Anthropic Messages API (and compatible endpoints such as
/// LM Studio).
///
/// The Messages API caps temperature at 1.0, so configured values above that
/// are clamped when the request is built.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicClient {
    pub fn new(config: &ModelConfig) -> Result<Self, ConfigError> {
        let base = config.base_url().unwrap_or(DEFAULT_ANTHROPIC_BASE_URL);
        Ok(Self {
            client: build_http_client(config.timeout())?,
            api_key: config.api_key().to_string(),
            model: config.model_name().to_string(),
            temperature: config.temperature().min(1.0),
            max_tokens: config.max_tokens(),
            timeout: config.timeout(),
            url: format!("{}{}", base.trim_end_matches('/'), MESSAGES_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn extract_text(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::provider(format!("{CLIENT_NAME}: failed to parse response: {e}"))
        })?;

        let texts: Vec<String> = api_response
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect();

        if texts.is_empty() {
            return Err(DomainError::provider(format!(
                "{CLIENT_NAME}: response contained no text blocks"
            )));
        }

        Ok(texts.concat())
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn generate(&self, system_prompt: &str, user_text: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: system_prompt,
            messages: vec![ApiMessage {
                role: "user",
                content: user_text,
            }],
        };

        debug!(
            "{CLIENT_NAME} request: model={} max_tokens={} user={}",
            self.model, self.max_tokens, user_text
        );

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(CLIENT_NAME, e, self.timeout))?;

        let body = read_success_body(CLIENT_NAME, response, self.timeout).await?;
        Self::extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(temperature: f32) -> ModelConfig {
        ModelConfig::builder()
            .api_key("k")
            .model_name("claude-haiku-4-5")
            .temperature(temperature)
            .build()
            .unwrap()
    }

    #[test]
    fn default_url_targets_anthropic() {
        let client = AnthropicClient::new(&config(0.7)).unwrap();
        assert_eq!(client.url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn temperature_is_clamped_to_one() {
        let client = AnthropicClient::new(&config(1.8)).unwrap();
        assert_eq!(client.temperature, 1.0);
    }

    #[test]
    fn extract_text_concatenates_text_blocks() {
        let body = r#"{"content":[{"type":"text","text":"Hello, "},{"type":"tool_use","id":"x"},{"type":"text","text":"world"}]}"#;
        assert_eq!(AnthropicClient::extract_text(body).unwrap(), "Hello, world");
    }

    #[test]
    fn extract_text_rejects_missing_text() {
        let err = AnthropicClient::extract_text(r#"{"content":[]}"#).unwrap_err();
        assert!(err.is_provider());
    }

    #[test]
    fn extract_text_rejects_wrong_shape() {
        assert!(AnthropicClient::extract_text(r#"{"error":"overloaded"}"#).is_err());
    }
}
