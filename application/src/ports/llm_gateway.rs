//! LLM Gateway port
//!
//! Defines the interface for communicating with the completion service.

use async_trait::async_trait;
use concierge_domain::{Message, ModelParams};
use thiserror::Error;

/// Errors that can occur during completion requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for the completion service
///
/// One call sends the whole conversation. The returned assistant message
/// either carries final `content` or one or more `tool_calls`.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Complete the conversation.
    ///
    /// `tools` holds JSON tool schemas; an empty slice offers no tools.
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[serde_json::Value],
        params: &ModelParams,
    ) -> Result<Message, GatewayError>;
}
