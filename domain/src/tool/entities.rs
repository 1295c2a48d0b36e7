//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a tool that can be offered to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_weather")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
    /// Whether arguments outside `parameters` are accepted
    pub additional_properties: bool,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    /// Create a definition that forbids arguments outside its parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            additional_properties: false,
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn allow_additional_properties(mut self) -> Self {
        self.additional_properties = true;
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    /// JSON Schema type for `param_type`; unrecognized hints become `"string"`.
    pub fn json_type(&self) -> &'static str {
        match self.param_type.as_str() {
            "number" => "number",
            "integer" => "integer",
            "boolean" => "boolean",
            _ => "string",
        }
    }

    /// Whether `value` has this parameter's JSON type.
    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match self.json_type() {
            "number" => value.is_number(),
            "integer" => value.is_i64() || value.is_u64(),
            "boolean" => value.is_boolean(),
            _ => value.is_string(),
        }
    }
}

/// Specification of the tools available to an agent
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// All definitions, sorted by name.
    pub fn sorted(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<&ToolDefinition> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Restrict the spec to the named tools. Unknown names are ignored.
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> ToolSpec {
        names
            .iter()
            .filter_map(|name| self.tools.get(name.as_ref()))
            .fold(ToolSpec::new(), |spec, tool| spec.register(tool.clone()))
    }
}

/// A call to a tool requested by the completion service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Opaque identifier assigned by the completion service
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_tool(name: &str) -> ToolDefinition {
        ToolDefinition::new(name, "Look something up for a city")
            .with_parameter(ToolParameter::new("city", "City name", true))
    }

    #[test]
    fn test_tool_definition() {
        let tool = city_tool("get_weather");

        assert_eq!(tool.name, "get_weather");
        assert!(!tool.additional_properties);
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameter("city").unwrap().param_type, "string");
        assert_eq!(tool.required_parameters().count(), 1);
    }

    #[test]
    fn test_tool_spec_subset() {
        let spec = ToolSpec::new()
            .register(city_tool("get_weather"))
            .register(city_tool("get_food_info"));

        let weather_only = spec.subset(&["get_weather", "not_registered"]);
        assert_eq!(weather_only.len(), 1);
        assert!(weather_only.contains("get_weather"));
        assert!(!weather_only.contains("get_food_info"));
    }

    #[test]
    fn test_tool_spec_sorted() {
        let spec = ToolSpec::new()
            .register(city_tool("get_weather"))
            .register(city_tool("get_food_info"));

        let names: Vec<&str> = spec.sorted().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["get_food_info", "get_weather"]);
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("call_1", "get_weather").with_arg("city", "Tokyo");

        assert_eq!(call.id, "call_1");
        assert_eq!(call.get_string("city"), Some("Tokyo"));
        assert_eq!(call.require_string("city").unwrap(), "Tokyo");
        assert!(call.require_string("country").is_err());
    }
}
