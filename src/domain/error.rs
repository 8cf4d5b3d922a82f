use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Caller-supplied input violates the request contract.
    #[error("{0}")]
    Validation(String),

    /// Any failure of the external model call: transport, auth, quota,
    /// timeout or an undecodable response.
    #[error("Provider error: {0}")]
    Provider(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

/// Startup-fatal configuration problems. Each variant names the offending field.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    MissingField(&'static str),

    #[error("Invalid configuration for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
            Self::InvalidValue { field, .. } => field,
        }
    }
}
