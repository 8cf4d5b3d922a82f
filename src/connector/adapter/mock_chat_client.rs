use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ModelClient;
use crate::domain::DomainError;

#[derive(Debug, Clone)]
enum MockBehavior {
    Echo,
    Fixed(String),
    Fail(String),
}

/// In-process [`ModelClient`] that never touches the network.
///
/// Serves `--mock-model` runs and doubles as the test stub: it can echo the
/// user text, return a fixed reply, or fail every call. Invocations are
/// counted so callers can assert how often the model was reached.
pub struct MockChatClient {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fixed(reply.into()))
    }

    pub fn failing(cause: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(cause.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelClient for MockChatClient {
    async fn generate(&self, _system_prompt: &str, user_text: &str) -> Result<String, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("MockChatClient call #{call} ({} chars)", user_text.chars().count());

        match &self.behavior {
            MockBehavior::Echo => Ok(user_text.to_string()),
            MockBehavior::Fixed(reply) => Ok(reply.clone()),
            MockBehavior::Fail(cause) => Err(DomainError::provider(cause.clone())),
        }
    }
}
