use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Body of `POST /api/chat`.
///
/// `message` is optional at the wire level so that a missing or `null` field
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Returns the message as sent, or a validation error when it is missing
    /// or blank.
    pub fn into_message(self) -> Result<String, DomainError> {
        require_non_blank("message", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub response: String,
}

impl ChatResponse {
    pub fn new(message: String, response: String) -> Self {
        Self { message, response }
    }
}

/// Body of `POST /api/chat/summarize`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn into_text(self) -> Result<String, DomainError> {
        require_non_blank("text", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub original: String,
    pub summary: String,
}

impl SummarizeResponse {
    pub fn new(original: String, summary: String) -> Self {
        Self { original, summary }
    }
}

/// Liveness payload. Never depends on the model backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}

fn require_non_blank(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DomainError::validation(format!("{field} must not be empty"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_keeps_message_untrimmed() {
        let message = ChatRequest::new("  hello ").into_message().unwrap();
        assert_eq!(message, "  hello ");
    }

    #[test]
    fn chat_request_rejects_missing_and_blank() {
        for request in [ChatRequest::default(), ChatRequest::new(""), ChatRequest::new(" \n\t")] {
            let err = request.into_message().unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "message must not be empty");
        }
    }

    #[test]
    fn summarize_request_names_text_field() {
        let err = SummarizeRequest::new("   ").into_text().unwrap_err();
        assert_eq!(err.to_string(), "text must not be empty");
    }

    #[test]
    fn null_field_deserializes_to_none() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert!(request.message.is_none());

        let request: SummarizeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
    }

    #[test]
    fn wrong_field_type_fails_to_deserialize() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message": 42}"#).is_err());
    }

    #[test]
    fn health_status_serializes_fixed_shape() {
        let json = serde_json::to_value(HealthStatus::ok("assistant-api")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "service": "assistant-api"})
        );
    }
}
