//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the function
//! schema the Chat Completions API accepts.

use concierge_application::ports::tool_schema::ToolSchemaPort;
use concierge_domain::tool::entities::ToolDefinition;

/// Default implementation producing JSON Schema.
///
/// Parameter types come from [`ToolParameter::json_type`]. `strict` is set
/// only when the API's strict mode can accept the schema: every property
/// required and no additional properties.
///
/// [`ToolParameter::json_type`]: concierge_domain::ToolParameter::json_type
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(param.json_type()));
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        let strict = !tool.additional_properties && tool.parameters.iter().all(|p| p.required);

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": tool.additional_properties,
            },
            "strict": strict,
        })
    }
}
