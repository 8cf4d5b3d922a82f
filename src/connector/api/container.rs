use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{AssistantService, ModelClient};
use crate::connector::adapter::{AnthropicClient, MockChatClient, OpenAiClient};
use crate::domain::{ConfigError, ModelConfig, ProviderKind};

/// Which model client the container wires behind the assistant.
#[derive(Debug, Clone)]
pub enum ModelBackend {
    Provider {
        kind: ProviderKind,
        config: ModelConfig,
    },
    /// Offline echo model; needs no credentials.
    Mock,
}

pub struct ContainerConfig {
    pub backend: ModelBackend,
    pub service_name: String,
}

/// Shared, immutable wiring handed to every request handler.
///
/// Cloning is cheap: only the `Arc`s are copied.
#[derive(Clone)]
pub struct Container {
    assistant: Arc<AssistantService>,
    service_name: Arc<str>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self, ConfigError> {
        let model_client: Arc<dyn ModelClient> = match &config.backend {
            ModelBackend::Provider { kind, config } => {
                info!(
                    "Initializing {} model client: model={}, temperature={}, max_tokens={}, timeout={:?}",
                    kind.as_str(),
                    config.model_name(),
                    config.temperature(),
                    config.max_tokens(),
                    config.timeout()
                );
                if let Some(base_url) = config.base_url() {
                    debug!("Using provider endpoint override {}", base_url);
                }
                match kind {
                    ProviderKind::Openai => {
                        Arc::new(OpenAiClient::new(config)?) as Arc<dyn ModelClient>
                    }
                    ProviderKind::Anthropic => {
                        Arc::new(AnthropicClient::new(config)?) as Arc<dyn ModelClient>
                    }
                }
            }
            ModelBackend::Mock => {
                info!("Using mock model client");
                Arc::new(MockChatClient::new())
            }
        };

        Ok(Self::with_model_client(model_client, config.service_name))
    }

    /// Wire the container around an already-built model client.
    pub fn with_model_client(model_client: Arc<dyn ModelClient>, service_name: impl Into<String>) -> Self {
        let service_name: String = service_name.into();
        Self {
            assistant: Arc::new(AssistantService::new(model_client)),
            service_name: Arc::from(service_name),
        }
    }

    pub fn assistant(&self) -> &AssistantService {
        &self.assistant
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_backend_needs_no_credentials() {
        let container = Container::new(ContainerConfig {
            backend: ModelBackend::Mock,
            service_name: "svc".to_string(),
        })
        .unwrap();
        assert_eq!(container.service_name(), "svc");
    }

    #[test]
    fn provider_backends_build_from_config() {
        let config = ModelConfig::builder().api_key("sk-test").build().unwrap();
        for kind in [ProviderKind::Openai, ProviderKind::Anthropic] {
            let container = Container::new(ContainerConfig {
                backend: ModelBackend::Provider {
                    kind,
                    config: config.clone(),
                },
                service_name: "svc".to_string(),
            });
            assert!(container.is_ok());
        }
    }

    #[tokio::test]
    async fn mock_backend_echoes_through_assistant() {
        let container = Container::new(ContainerConfig {
            backend: ModelBackend::Mock,
            service_name: "svc".to_string(),
        })
        .unwrap();
        assert_eq!(container.assistant().chat("ping").await.unwrap(), "ping");
    }
}
