//! Error types for the OpenAI adapter

use concierge_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("Environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) if e.is_decode() => GatewayError::InvalidResponse(e.to_string()),
            OpenAiError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Api { status, message } => match status {
                401 | 403 => GatewayError::Unauthorized(message),
                429 => GatewayError::RateLimited(message),
                _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
            },
            OpenAiError::Serialization(e) => GatewayError::InvalidResponse(e.to_string()),
            OpenAiError::UnexpectedResponse(msg) => GatewayError::InvalidResponse(msg),
            OpenAiError::MissingApiKey(var) => {
                GatewayError::Unauthorized(format!("Environment variable {} is not set", var))
            }
            OpenAiError::ClientBuild(msg) => GatewayError::Other(msg),
        }
    }
}
