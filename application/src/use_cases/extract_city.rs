//! City extraction use case.
//!
//! Turns a free-text query into a single city name with one deterministic
//! completion call. Never fails: any problem yields the caller's default city.

use crate::ports::llm_gateway::LlmGateway;
use concierge_domain::prompt::PromptTemplate;
use concierge_domain::{Message, Model, ModelParams};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct CityExtractor {
    gateway: Arc<dyn LlmGateway>,
    params: ModelParams,
}

impl CityExtractor {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            params: ModelParams::deterministic(Model::utility()),
        }
    }

    /// Use `model` instead of the utility model. Temperature stays 0.
    pub fn with_model(mut self, model: Model) -> Self {
        self.params = ModelParams::deterministic(model);
        self
    }

    /// City named in `query`, or `default_city`.
    ///
    /// The model's answer is trimmed and otherwise trusted verbatim.
    pub async fn extract(&self, query: &str, default_city: &str) -> String {
        let prompt = PromptTemplate::city_extraction(query, default_city);
        let messages = [Message::user(prompt)];

        match self.gateway.complete(&messages, &[], &self.params).await {
            Ok(response) => {
                let city = response.content.trim();
                if city.is_empty() {
                    warn!("City extraction returned nothing, using {}", default_city);
                    return default_city.to_string();
                }
                debug!("Extracted city: {}", city);
                city.to_string()
            }
            Err(e) => {
                warn!("City extraction failed ({}), using {}", e, default_city);
                default_city.to_string()
            }
        }
    }
}
