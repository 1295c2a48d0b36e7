//! Tool Executor port
//!
//! Defines the interface for dispatching tool calls requested by the model.

use async_trait::async_trait;
use concierge_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::{ToolError, ToolOutput},
};
use thiserror::Error;

/// Why a tool call produced no output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Port for tool execution
///
/// Implementations validate the call against its definition before the tool
/// runs. A rejected call never reaches the tool.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().contains(name)
    }

    /// Validate and run a tool call
    async fn dispatch(&self, call: &ToolCall) -> Result<ToolOutput, DispatchError>;
}
