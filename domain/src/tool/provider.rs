//! Executable side of a tool

use async_trait::async_trait;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::{ToolError, ToolOutput};

/// A tool the model can call.
///
/// Implementations receive calls that were already validated against
/// [`Tool::definition`].
#[async_trait]
pub trait Tool: Send + Sync {
    /// Schema offered to the model
    fn definition(&self) -> &ToolDefinition;

    /// Execute the call
    async fn invoke(&self, call: &ToolCall) -> Result<ToolOutput, ToolError>;

    fn name(&self) -> &str {
        &self.definition().name
    }
}
