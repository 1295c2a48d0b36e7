//! Tool domain traits
//!
//! Contains pure domain logic for validating tool calls against their
//! definitions. Nothing here performs I/O.

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Checks that every required parameter is present, that each declared
/// argument has the JSON type its parameter names and, when the definition
/// forbids additional properties, that no unknown argument was passed.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in definition.required_parameters() {
            if !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        // Sorted so the reported name is stable across runs
        let mut arg_names: Vec<&String> = call.arguments.keys().collect();
        arg_names.sort();
        for arg_name in arg_names {
            match definition.parameter(arg_name) {
                Some(param) => {
                    if !param.accepts(&call.arguments[arg_name]) {
                        return Err(format!(
                            "Parameter '{}' for tool '{}' must be a {}",
                            arg_name,
                            definition.name,
                            param.json_type()
                        ));
                    }
                }
                None if definition.additional_properties => {}
                None => {
                    return Err(format!(
                        "Unknown parameter '{}' for tool '{}'",
                        arg_name, definition.name
                    ));
                }
            }
        }

        Ok(())
    }
}
