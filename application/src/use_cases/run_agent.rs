//! Run Agent use case.
//!
//! An [`Agent`] answers one query for its topic with at most one tool round:
//!
//! ```text
//! AwaitingCompletion ──▶ Done
//!        │
//!        ▼
//! ToolRequested ──▶ ToolExecuted ──▶ AwaitingFinalCompletion ──▶ Done
//! ```
//!
//! Any step may fail. [`Agent::run`] propagates the failure,
//! [`Agent::process_query`] turns it into a [`QueryResult::Failure`].
//!
//! Only the first tool call of a response is processed. Further calls in
//! the same response are dropped with a warning and never executed.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::tool_executor::{DispatchError, ToolExecutorPort};
use crate::ports::tool_schema::ToolSchemaPort;
use concierge_domain::util::truncate_str;
use concierge_domain::{AgentConfig, Conversation, Message, QueryResult, Topic};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while an agent answers a query.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("No response from model")]
    EmptyResponse,

    #[error("Failed to serialize tool result: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Topic agent: system prompt, tool subset and model parameters bound together.
pub struct Agent {
    config: AgentConfig,
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Agent {
    pub fn new(
        config: AgentConfig,
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            config,
            gateway,
            tool_executor,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn topic(&self) -> Topic {
        self.config.topic
    }

    /// Answer `query`, never failing.
    pub async fn process_query(&self, query: &str) -> QueryResult {
        match self.run(query).await {
            Ok(answer) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "agent_answer",
                    json!({
                        "topic": self.topic().as_str(),
                        "text": answer,
                    }),
                ));
                QueryResult::Answer(answer)
            }
            Err(e) => {
                error!("{} agent failed: {}", self.topic(), e);
                self.conversation_logger.log(ConversationEvent::new(
                    "agent_failure",
                    json!({
                        "topic": self.topic().as_str(),
                        "error": e.to_string(),
                    }),
                ));
                QueryResult::failure(self.topic(), e.to_string())
            }
        }
    }

    /// Answer `query`, propagating the first failure.
    pub async fn run(&self, query: &str) -> Result<String, AgentError> {
        info!(
            "{} agent: {}",
            self.topic(),
            truncate_str(query, 100)
        );

        let mut conversation = Conversation::start(self.config.system_prompt.as_str(), query);

        let spec = self.tool_executor.tool_spec().subset(self.config.tools.as_slice());
        let tools = self.tool_schema.tools_schema(&spec);
        debug!(
            "{} agent: model {}, {} tools offered",
            self.topic(),
            self.config.model(),
            tools.len()
        );

        let response = self.complete(&conversation, &tools).await?;
        if !response.has_tool_calls() {
            return final_text(response);
        }

        let mut calls = response.tool_calls.into_iter();
        let Some(call) = calls.next() else {
            return Err(AgentError::EmptyResponse);
        };
        let dropped: Vec<String> = calls.map(|c| c.name).collect();
        if !dropped.is_empty() {
            warn!(
                "{} agent: processing only '{}', dropping {} further tool call(s): {:?}",
                self.topic(),
                call.name,
                dropped.len(),
                dropped
            );
        }

        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            json!({
                "topic": self.topic().as_str(),
                "id": call.id,
                "tool": call.name,
                "arguments": call.arguments,
            }),
        ));

        if !self.config.allows_tool(&call.name) {
            let err = DispatchError::UnknownTool(call.name.clone());
            self.log_tool_error(&call.name, &err);
            return Err(err.into());
        }

        let output = match self.tool_executor.dispatch(&call).await {
            Ok(output) => output,
            Err(e) => {
                self.log_tool_error(&call.name, &e);
                return Err(e.into());
            }
        };

        let content = serde_json::to_string(&output)?;
        debug!("{} -> {}", call.name, truncate_str(&content, 200));
        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            json!({
                "topic": self.topic().as_str(),
                "id": call.id,
                "tool": call.name,
                "output": output,
            }),
        ));

        let call_id = call.id.clone();
        conversation.push(Message::assistant_tool_calls(response.content, vec![call]));
        conversation.push(Message::tool_result(call_id, content));

        // Second and last round, no tools offered
        let response = self.complete(&conversation, &[]).await?;
        final_text(response)
    }

    async fn complete(
        &self,
        conversation: &Conversation,
        tools: &[serde_json::Value],
    ) -> Result<Message, GatewayError> {
        self.conversation_logger.log(ConversationEvent::new(
            "llm_request",
            json!({
                "topic": self.topic().as_str(),
                "model": self.config.model().to_string(),
                "messages": conversation.messages(),
                "tools": tools.len(),
            }),
        ));

        let response = self
            .gateway
            .complete(conversation.messages(), tools, &self.config.params)
            .await?;

        self.conversation_logger.log(ConversationEvent::new(
            "llm_response",
            json!({
                "topic": self.topic().as_str(),
                "model": self.config.model().to_string(),
                "message": response,
            }),
        ));
        Ok(response)
    }

    fn log_tool_error(&self, tool: &str, error: &DispatchError) {
        warn!("Tool '{}' failed: {}", tool, error);
        self.conversation_logger.log(ConversationEvent::new(
            "tool_error",
            json!({
                "topic": self.topic().as_str(),
                "tool": tool,
                "error": error.to_string(),
            }),
        ));
    }
}

fn final_text(response: Message) -> Result<String, AgentError> {
    if response.content.trim().is_empty() {
        return Err(AgentError::EmptyResponse);
    }
    Ok(response.content)
}
