use thiserror::Error;

/// Placeholder used when a request failed before any response body arrived.
pub const NO_RESPONSE_BODY: &str = "No response object";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error: {message}")]
    Network { message: String, body: String },

    #[error("Unexpected API response format: {message}")]
    Format { message: String, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>, body: Option<String>) -> Self {
        Self::Network {
            message: msg.into(),
            body: body.unwrap_or_else(|| NO_RESPONSE_BODY.to_string()),
        }
    }

    pub fn format(msg: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Format {
            message: msg.into(),
            body: body.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Raw response body attached to network and format errors.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Network { body, .. } | Self::Format { body, .. } => Some(body),
            _ => None,
        }
    }
}
