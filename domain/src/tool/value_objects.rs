//! Tool value objects

use thiserror::Error;

/// Structured result of a tool invocation.
///
/// Serialized verbatim into the tool-role message the model reads next.
pub type ToolOutput = serde_json::Value;

/// Failure raised by a tool, tagged with the tool family it came from
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("{0}")]
    Weather(String),

    #[error("{0}")]
    Food(String),

    #[error("{0}")]
    Other(String),
}

impl ToolError {
    /// Short kind tag for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Weather(_) => "weather",
            ToolError::Food(_) => "food",
            ToolError::Other(_) => "other",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ToolError::Weather(m) | ToolError::Food(m) | ToolError::Other(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display_is_bare_message() {
        let err = ToolError::Weather("timeout".to_string());
        assert_eq!(err.to_string(), "timeout");
        assert_eq!(err.kind(), "weather");
        assert_eq!(err.message(), "timeout");
    }
}
