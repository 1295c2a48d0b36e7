//! Tool schema conversion port.
//!
//! Separates "which tools to offer" (domain) from "how to serialize them for
//! the completion API" (infrastructure).

use concierge_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to the completion API's JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert every tool in `spec` (sorted by name).
    fn tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.sorted()
            .into_iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }
}
