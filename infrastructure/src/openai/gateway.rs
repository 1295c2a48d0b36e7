//! LLM Gateway implementation over the Chat Completions endpoint

use super::error::{OpenAiError, Result};
use super::protocol::{ApiErrorBody, ChatRequest, ChatResponse, WireMessage, wrap_tool};
use async_trait::async_trait;
use concierge_application::ports::llm_gateway::{GatewayError, LlmGateway};
use concierge_domain::{Message, ModelParams};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Completion gateway backed by an OpenAI-compatible HTTP API
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("city-concierge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OpenAiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Read the API key from the environment variable `api_key_env`
    pub fn from_env(
        base_url: impl Into<String>,
        api_key_env: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| OpenAiError::MissingApiKey(api_key_env.to_string()))?;
        Self::new(base_url, api_key, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        messages: &[Message],
        tools: &[serde_json::Value],
        params: &ModelParams,
    ) -> Result<Message> {
        let request = ChatRequest {
            model: params.model.as_str(),
            temperature: params.temperature,
            messages: messages
                .iter()
                .map(WireMessage::from_domain)
                .collect::<Result<Vec<_>>>()?,
            tools: tools.iter().map(wrap_tool).collect(),
        };

        debug!(
            "POST {}/chat/completions model={} messages={} tools={}",
            self.base_url,
            request.model,
            request.messages.len(),
            request.tools.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or(body)
                });
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await?;
        if let Some(reason) = body.choices.first().and_then(|c| c.finish_reason.as_deref()) {
            debug!("finish_reason={}", reason);
        }
        let message = body.into_message()?;
        info!(
            "Completion from {}: {} chars, {} tool call(s)",
            params.model,
            message.content.chars().count(),
            message.tool_calls.len()
        );
        Ok(message)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[serde_json::Value],
        params: &ModelParams,
    ) -> std::result::Result<Message, GatewayError> {
        self.send(messages, tools, params)
            .await
            .map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let gateway =
            OpenAiGateway::new("https://example.test/v1/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.base_url(), "https://example.test/v1");
    }

    #[test]
    fn test_from_env_missing_key() {
        let result = OpenAiGateway::from_env(
            DEFAULT_BASE_URL,
            "CONCIERGE_TEST_KEY_THAT_IS_NEVER_SET",
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(OpenAiError::MissingApiKey(_))));
    }
}
