use std::fmt;
use std::time::Duration;

use crate::domain::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const MAX_TEMPERATURE: f32 = 2.0;

/// Process-wide model settings, validated once at startup and immutable after.
///
/// The API key is kept out of `Debug` output so the config can be logged.
#[derive(Clone)]
pub struct ModelConfig {
    api_key: String,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
    base_url: Option<String>,
}

impl ModelConfig {
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Endpoint override for provider-compatible servers. `None` means the
    /// provider's public endpoint.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Clone, Default)]
pub struct ModelConfigBuilder {
    api_key: Option<String>,
    model_name: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
    base_url: Option<String>,
}

impl ModelConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField("api_key"))?;

        let model_name = self.model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model_name.trim().is_empty() {
            return Err(ConfigError::invalid("model_name", "must not be empty"));
        }

        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        // NaN fails the range check as well.
        if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(ConfigError::invalid(
                "temperature",
                format!("{temperature} is outside [0, {MAX_TEMPERATURE}]"),
            ));
        }

        let max_tokens = self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        if max_tokens == 0 {
            return Err(ConfigError::invalid("max_tokens", "must be greater than 0"));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::invalid("timeout", "must be greater than 0"));
        }

        let base_url = self
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(ModelConfig {
            api_key,
            model_name,
            temperature,
            max_tokens,
            timeout,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = ModelConfig::builder().api_key("sk-test").build().unwrap();
        assert_eq!(config.model_name(), DEFAULT_MODEL);
        assert_eq!(config.temperature(), 0.7);
        assert_eq!(config.max_tokens(), 2000);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.base_url().is_none());
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        let err = ModelConfig::builder().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("api_key"));

        let err = ModelConfig::builder().api_key("   ").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("api_key"));
    }

    #[test]
    fn temperature_bounds_are_inclusive() {
        for t in [0.0, 2.0] {
            assert!(ModelConfig::builder().api_key("k").temperature(t).build().is_ok());
        }
        for t in [-0.1, 2.01, f32::NAN] {
            let err = ModelConfig::builder().api_key("k").temperature(t).build().unwrap_err();
            assert_eq!(err.field(), "temperature");
        }
    }

    #[test]
    fn zero_tokens_and_zero_timeout_are_rejected() {
        let err = ModelConfig::builder().api_key("k").max_tokens(0).build().unwrap_err();
        assert_eq!(err.field(), "max_tokens");

        let err = ModelConfig::builder()
            .api_key("k")
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "timeout");
    }

    #[test]
    fn base_url_is_normalized() {
        let config = ModelConfig::builder()
            .api_key("k")
            .base_url(Some("http://localhost:1234/".to_string()))
            .build()
            .unwrap();
        assert_eq!(config.base_url(), Some("http://localhost:1234"));

        let config = ModelConfig::builder()
            .api_key("k")
            .base_url(Some("  ".to_string()))
            .build()
            .unwrap();
        assert!(config.base_url().is_none());
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = ModelConfig::builder().api_key("sk-secret").build().unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
