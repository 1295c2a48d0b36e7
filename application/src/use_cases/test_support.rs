//! Scripted port implementations shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::tool_executor::{DispatchError, ToolExecutorPort};
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use concierge_domain::tool::entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
use concierge_domain::tool::value_objects::ToolOutput;
use concierge_domain::{Message, ModelParams};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// One request seen by [`ScriptedGateway`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<Message>,
    pub tools: Vec<serde_json::Value>,
    pub params: ModelParams,
}

/// Gateway answering from a queue of scripted responses
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<Message, GatewayError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedGateway {
    pub fn new(responses: Vec<Result<Message, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(messages: Vec<Message>) -> Self {
        Self::new(messages.into_iter().map(Ok).collect())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[serde_json::Value],
        params: &ModelParams,
    ) -> Result<Message, GatewayError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            messages: messages.to_vec(),
            tools: tools.to_vec(),
            params: params.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

/// Executor returning a fixed result per tool name and recording calls
pub struct MockToolExecutor {
    spec: ToolSpec,
    results: HashMap<String, Result<ToolOutput, DispatchError>>,
    calls: Mutex<Vec<ToolCall>>,
}

impl MockToolExecutor {
    pub fn new() -> Self {
        let city = || ToolParameter::new("city", "City name", true);
        Self {
            spec: ToolSpec::new()
                .register(ToolDefinition::new("get_weather", "Weather").with_parameter(city()))
                .register(ToolDefinition::new("get_food_info", "Food").with_parameter(city())),
            results: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_result(
        mut self,
        tool: &str,
        result: Result<ToolOutput, DispatchError>,
    ) -> Self {
        self.results.insert(tool.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, tool: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name == tool)
            .count()
    }
}

#[async_trait]
impl ToolExecutorPort for MockToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn dispatch(&self, call: &ToolCall) -> Result<ToolOutput, DispatchError> {
        if !self.has_tool(&call.name) {
            return Err(DispatchError::UnknownTool(call.name.clone()));
        }
        self.calls.lock().unwrap().push(call.clone());
        self.results
            .get(&call.name)
            .cloned()
            .unwrap_or_else(|| Ok(serde_json::json!({})))
    }
}

/// Schema port producing only the name, enough to assert which tools were offered
pub struct NameOnlySchema;

impl ToolSchemaPort for NameOnlySchema {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        serde_json::json!({ "name": tool.name })
    }
}

pub fn tool_call_message(calls: Vec<ToolCall>) -> Message {
    Message::assistant_tool_calls("", calls)
}
