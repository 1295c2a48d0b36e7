//! Chat Completions wire types and conversions

use super::error::{OpenAiError, Result};
use concierge_domain::{Message, Role, ToolCall};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub kind: String,
    pub function: WireFunction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunction {
    pub name: String,
    /// JSON object serialized as a string
    #[serde(default)]
    pub arguments: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: WireMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

fn function_type() -> String {
    "function".to_string()
}

/// Wrap a tool schema the way the Chat Completions API expects
pub fn wrap_tool(schema: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "type": "function", "function": schema })
}

impl WireMessage {
    pub fn from_domain(message: &Message) -> Result<Self> {
        let tool_calls = message
            .tool_calls
            .iter()
            .map(WireToolCall::from_domain)
            .collect::<Result<Vec<_>>>()?;

        // Assistant tool-call turns may omit content
        let content = if message.content.is_empty() && !tool_calls.is_empty() {
            None
        } else {
            Some(message.content.clone())
        };

        Ok(Self {
            role: message.role,
            content,
            tool_calls,
            tool_call_id: message.tool_call_id.clone(),
        })
    }

    pub fn into_domain(self) -> Result<Message> {
        let tool_calls = self
            .tool_calls
            .into_iter()
            .map(WireToolCall::into_domain)
            .collect::<Result<Vec<_>>>()?;

        Ok(Message {
            role: self.role,
            content: self.content.unwrap_or_default(),
            tool_calls,
            tool_call_id: self.tool_call_id,
        })
    }
}

impl WireToolCall {
    pub fn from_domain(call: &ToolCall) -> Result<Self> {
        Ok(Self {
            id: call.id.clone(),
            kind: function_type(),
            function: WireFunction {
                name: call.name.clone(),
                arguments: serde_json::to_string(&call.arguments)?,
            },
        })
    }

    pub fn into_domain(self) -> Result<ToolCall> {
        let arguments: HashMap<String, serde_json::Value> =
            if self.function.arguments.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&self.function.arguments).map_err(|e| {
                    OpenAiError::UnexpectedResponse(format!(
                        "arguments of tool call '{}' are not a JSON object: {}",
                        self.function.name, e
                    ))
                })?
            };

        Ok(ToolCall {
            id: self.id,
            name: self.function.name,
            arguments,
        })
    }
}

impl ChatResponse {
    /// The first choice's message
    pub fn into_message(self) -> Result<Message> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::UnexpectedResponse("response has no choices".to_string()))?;
        choice.message.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tool_call_response() {
        let body = json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "finish_reason": "tool_calls",
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "get_weather",
                            "arguments": "{\"city\":\"東京\"}"
                        }
                    }]
                }
            }]
        });

        let response: ChatResponse = serde_json::from_value(body).unwrap();
        let message = response.into_message().unwrap();

        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "");
        assert_eq!(message.tool_calls.len(), 1);
        assert_eq!(message.tool_calls[0].id, "call_abc");
        assert_eq!(message.tool_calls[0].name, "get_weather");
        assert_eq!(message.tool_calls[0].get_string("city"), Some("東京"));
    }

    #[test]
    fn test_parse_text_response() {
        let body = json!({
            "choices": [{
                "message": { "role": "assistant", "content": "晴れです" },
                "finish_reason": "stop"
            }]
        });

        let response: ChatResponse = serde_json::from_value(body).unwrap();
        let message = response.into_message().unwrap();
        assert_eq!(message.content, "晴れです");
        assert!(!message.has_tool_calls());
    }

    #[test]
    fn test_empty_choices_is_error() {
        let response: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            response.into_message(),
            Err(OpenAiError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_malformed_arguments_is_error() {
        let call = WireToolCall {
            id: "call_1".to_string(),
            kind: "function".to_string(),
            function: WireFunction {
                name: "get_weather".to_string(),
                arguments: "not json".to_string(),
            },
        };
        assert!(call.into_domain().is_err());
    }

    #[test]
    fn test_serialize_tool_turn() {
        let call = ToolCall::new("call_1", "get_weather").with_arg("city", "東京");
        let assistant = WireMessage::from_domain(&Message::assistant_tool_calls("", vec![call]))
            .unwrap();
        let tool = WireMessage::from_domain(&Message::tool_result("call_1", "{\"ok\":true}"))
            .unwrap();

        let assistant_json = serde_json::to_value(&assistant).unwrap();
        assert_eq!(assistant_json["role"], "assistant");
        assert!(assistant_json["content"].is_null());
        assert_eq!(assistant_json["tool_calls"][0]["type"], "function");
        assert_eq!(
            assistant_json["tool_calls"][0]["function"]["arguments"],
            "{\"city\":\"東京\"}"
        );

        let tool_json = serde_json::to_value(&tool).unwrap();
        assert_eq!(tool_json["role"], "tool");
        assert_eq!(tool_json["tool_call_id"], "call_1");
        assert_eq!(tool_json["content"], "{\"ok\":true}");
    }

    #[test]
    fn test_request_omits_empty_tools() {
        let request = ChatRequest {
            model: "gpt-4",
            temperature: 0.0,
            messages: vec![WireMessage::from_domain(&Message::user("hi")).unwrap()],
            tools: vec![],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
        assert_eq!(value["model"], "gpt-4");

        let wrapped = wrap_tool(&json!({ "name": "get_weather" }));
        assert_eq!(wrapped["type"], "function");
        assert_eq!(wrapped["function"]["name"], "get_weather");
    }
}
