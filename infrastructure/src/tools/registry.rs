//! Tool Registry
//!
//! The [`ToolRegistry`] maps tool names to [`Tool`] implementations and
//! implements [`ToolExecutorPort`]. Every call is validated against the
//! tool's definition first; a rejected call never reaches the tool.
//!
//! ```ignore
//! let registry = ToolRegistry::new()
//!     .register(WeatherTool::new(localizer.clone(), weather_provider))
//!     .register(FoodTool::new(localizer, knowledge_base));
//!
//! let output = registry.dispatch(&call).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use concierge_application::ports::tool_executor::{DispatchError, ToolExecutorPort};
use concierge_domain::tool::{
    entities::{ToolCall, ToolSpec},
    provider::Tool,
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::ToolOutput,
};

/// Name → tool mapping with argument validation
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    tool_spec: ToolSpec,
    validator: DefaultToolValidator,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            tool_spec: ToolSpec::new(),
            validator: DefaultToolValidator,
        }
    }

    /// Register a tool. A later tool with the same name replaces the earlier one.
    pub fn register<T: Tool + 'static>(self, tool: T) -> Self {
        self.register_arc(Arc::new(tool))
    }

    /// Register a tool (Arc version)
    pub fn register_arc(mut self, tool: Arc<dyn Tool>) -> Self {
        let definition = tool.definition().clone();
        tracing::debug!(tool = %definition.name, "Registered tool");
        self.tools.insert(definition.name.clone(), tool);
        self.tool_spec = self.tool_spec.register(definition);
        self
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<ToolOutput, DispatchError> {
        let (Some(tool), Some(definition)) =
            (self.tools.get(&call.name), self.tool_spec.get(&call.name))
        else {
            tracing::warn!(tool = %call.name, "Unknown tool requested");
            return Err(DispatchError::UnknownTool(call.name.clone()));
        };

        self.validator
            .validate(call, definition)
            .map_err(|reason| DispatchError::InvalidArguments {
                tool: call.name.clone(),
                reason,
            })?;

        tracing::info!(tool = %call.name, id = %call.id, "Dispatching tool call");
        let output = tool.invoke(call).await.map_err(|e| {
            tracing::warn!(tool = %call.name, kind = e.kind(), error = %e, "Tool failed");
            DispatchError::from(e)
        })?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_domain::tool::entities::{ToolDefinition, ToolParameter};
    use concierge_domain::tool::value_objects::ToolError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTool {
        definition: ToolDefinition,
        invocations: Arc<AtomicUsize>,
        fail: bool,
    }

    impl CountingTool {
        fn new(name: &str, invocations: Arc<AtomicUsize>) -> Self {
            Self {
                definition: ToolDefinition::new(name, "test tool")
                    .with_parameter(ToolParameter::new("city", "City name", true)),
                invocations,
                fail: false,
            }
        }
    }

    #[async_trait]
    impl Tool for CountingTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn invoke(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ToolError::Weather("timeout".to_string()));
            }
            Ok(serde_json::json!({ "city": call.get_string("city") }))
        }
    }

    fn registry(counter: &Arc<AtomicUsize>) -> ToolRegistry {
        ToolRegistry::new().register(CountingTool::new("get_weather", counter.clone()))
    }

    #[tokio::test]
    async fn test_dispatch_valid_call() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = registry(&counter);

        let call = ToolCall::new("call_1", "get_weather").with_arg("city", "Tokyo");
        let output = registry.dispatch(&call).await.unwrap();

        assert_eq!(output["city"], "Tokyo");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(registry.has_tool("get_weather"));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_never_invokes() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = registry(&counter);

        let call = ToolCall::new("call_1", "get_stock_price").with_arg("city", "Tokyo");
        let err = registry.dispatch(&call).await.unwrap_err();

        assert_eq!(err, DispatchError::UnknownTool("get_stock_price".to_string()));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_invoke() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = registry(&counter);

        let missing = ToolCall::new("call_1", "get_weather");
        assert!(matches!(
            registry.dispatch(&missing).await,
            Err(DispatchError::InvalidArguments { .. })
        ));

        let extra = ToolCall::new("call_2", "get_weather")
            .with_arg("city", "Tokyo")
            .with_arg("country", "JP");
        assert!(matches!(
            registry.dispatch(&extra).await,
            Err(DispatchError::InvalidArguments { ref tool, .. }) if tool == "get_weather"
        ));

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wrongly_typed_argument_never_invokes() {
        let counter = Arc::new(AtomicUsize::new(0));
        let registry = registry(&counter);

        let call = ToolCall::new("call_1", "get_weather").with_arg("city", 123);
        let err = registry.dispatch(&call).await.unwrap_err();

        assert_eq!(
            err,
            DispatchError::InvalidArguments {
                tool: "get_weather".to_string(),
                reason: "Parameter 'city' for tool 'get_weather' must be a string".to_string(),
            }
        );
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tool_error_keeps_kind() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut tool = CountingTool::new("get_weather", counter.clone());
        tool.fail = true;
        let registry = ToolRegistry::new().register(tool);

        let call = ToolCall::new("call_1", "get_weather").with_arg("city", "Tokyo");
        let err = registry.dispatch(&call).await.unwrap_err();

        assert_eq!(
            err,
            DispatchError::Tool(ToolError::Weather("timeout".to_string()))
        );
        assert_eq!(err.to_string(), "timeout");
    }
}
