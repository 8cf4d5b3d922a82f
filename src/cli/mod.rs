use std::time::Duration;

use clap::{Args, Parser, ValueEnum};

use crate::domain::{
    ConfigError, ModelConfig, ProviderKind, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

pub const DEFAULT_SERVICE_NAME: &str = "assistant-api";

#[derive(Parser)]
#[command(name = "assistant-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Address to bind the HTTP server to
    #[arg(long, env = "ASSISTANT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "ASSISTANT_PORT", default_value = "8080")]
    pub port: u16,

    /// Name reported by the health endpoint
    #[arg(long, env = "ASSISTANT_SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Serve with an offline echo model instead of calling a provider
    #[arg(long)]
    pub mock_model: bool,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// `--provider` values; maps onto the domain's [`ProviderKind`].
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderArg {
    #[default]
    Openai,
    Anthropic,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => ProviderKind::Openai,
            ProviderArg::Anthropic => ProviderKind::Anthropic,
        }
    }
}

#[derive(Args, Clone)]
pub struct ModelArgs {
    /// Provider API key; falls back to OPENAI_API_KEY or ANTHROPIC_API_KEY per provider
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, env = "ASSISTANT_PROVIDER", value_enum, default_value_t = ProviderArg::Openai)]
    pub provider: ProviderArg,

    /// Endpoint override for provider-compatible servers
    #[arg(long, env = "ASSISTANT_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "ASSISTANT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, env = "ASSISTANT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    #[arg(long, env = "ASSISTANT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Provider request timeout in seconds
    #[arg(long, env = "ASSISTANT_TIMEOUT_SECS", default_value = "60")]
    pub timeout_secs: u64,
}

impl ModelArgs {
    pub fn provider(&self) -> ProviderKind {
        self.provider.into()
    }

    /// Build the model config, reading the key from the selected provider's
    /// environment variable when `--api-key` is absent.
    pub fn to_model_config(&self) -> Result<ModelConfig, ConfigError> {
        self.to_model_config_with(|name| std::env::var(name).ok())
    }

    /// Like [`Self::to_model_config`], with the environment lookup supplied.
    pub fn to_model_config_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ModelConfig, ConfigError> {
        let api_key = self
            .api_key
            .clone()
            .or_else(|| env(self.provider().api_key_env()));

        let mut builder = ModelConfig::builder()
            .model_name(&self.model)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .timeout(Duration::from_secs(self.timeout_secs))
            .base_url(self.base_url.clone());

        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }

        builder.build()
    }
}
