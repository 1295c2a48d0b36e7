//! Agent configuration

use serde::{Deserialize, Serialize};

use super::value_objects::Topic;
use crate::core::model::Model;

/// Parameters sent with every completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub model: Model,
    pub temperature: f32,
}

impl ModelParams {
    pub fn new(model: Model, temperature: f32) -> Self {
        Self { model, temperature }
    }

    /// Temperature 0, for calls whose output is parsed rather than read.
    pub fn deterministic(model: Model) -> Self {
        Self::new(model, 0.0)
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self::new(Model::default(), 0.7)
    }
}

/// Immutable configuration of a single agent
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub topic: Topic,
    pub params: ModelParams,
    pub system_prompt: String,
    /// Names of the tools this agent may call
    pub tools: Vec<String>,
}

impl AgentConfig {
    pub fn new(topic: Topic, system_prompt: impl Into<String>) -> Self {
        Self {
            topic,
            params: ModelParams::default(),
            system_prompt: system_prompt.into(),
            tools: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_tool(mut self, name: impl Into<String>) -> Self {
        self.tools.push(name.into());
        self
    }

    pub fn allows_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t == name)
    }

    pub fn model(&self) -> &Model {
        &self.params.model
    }

    pub fn temperature(&self) -> f32 {
        self.params.temperature
    }
}
