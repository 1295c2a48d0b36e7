//! `get_weather` tool

use async_trait::async_trait;
use concierge_application::ports::weather_provider::WeatherProvider;
use concierge_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::Tool,
    value_objects::{ToolError, ToolOutput},
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::localize::CityLocalizer;

/// Tool name constant
pub const GET_WEATHER: &str = "get_weather";

pub fn get_weather_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_WEATHER,
        "Get the current weather (temperature, conditions, humidity, wind speed) for a city.",
    )
    .with_parameter(ToolParameter::new("city", "Name of the city", true))
}

pub struct WeatherTool {
    definition: ToolDefinition,
    localizer: Arc<CityLocalizer>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherTool {
    pub fn new(localizer: Arc<CityLocalizer>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            definition: get_weather_definition(),
            localizer,
            provider,
        }
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn invoke(&self, call: &ToolCall) -> Result<ToolOutput, ToolError> {
        let city = call.require_string("city").map_err(ToolError::Weather)?;
        info!("Getting weather for city: {}", city);

        let english = self
            .localizer
            .to_english(city)
            .await
            .map_err(|e| ToolError::Weather(format!("都市名の変換に失敗しました: {}", e)))?;

        let report = self
            .provider
            .current(&english)
            .await
            .map_err(|e| ToolError::Weather(e.to_string()))?;

        Ok(json!({
            "city": city,
            "temperature": report.temperature,
            "description": report.description,
            "humidity": report.humidity,
            "wind_speed": report.wind_speed,
        }))
    }
}
