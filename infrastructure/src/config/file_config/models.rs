//! Model configuration from TOML (`[models]` section)

use super::ConfigValidationError;
use concierge_domain::{Model, ModelParams};
use serde::{Deserialize, Serialize};

/// Model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// agent = "gpt-4"            # Both topic agents unless overridden
/// temperature = 0.7
/// weather = "gpt-4o"         # Optional per-agent override
/// food = "gpt-4o"
/// extractor = "gpt-3.5-turbo"
/// localizer = "gpt-3.5-turbo"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub agent: String,
    pub temperature: f32,
    pub weather: Option<String>,
    pub food: Option<String>,
    /// City extraction, always at temperature 0
    pub extractor: String,
    /// City-name translation, always at temperature 0
    pub localizer: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            agent: Model::default().to_string(),
            temperature: 0.7,
            weather: None,
            food: None,
            extractor: Model::utility().to_string(),
            localizer: Model::utility().to_string(),
        }
    }
}

fn parse(name: &str) -> Model {
    name.trim().parse().unwrap_or_else(|never| match never {})
}

impl FileModelsConfig {
    pub fn weather_params(&self) -> ModelParams {
        let name = self.weather.as_deref().unwrap_or(&self.agent);
        ModelParams::new(parse(name), self.temperature)
    }

    pub fn food_params(&self) -> ModelParams {
        let name = self.food.as_deref().unwrap_or(&self.agent);
        ModelParams::new(parse(name), self.temperature)
    }

    pub fn extractor_model(&self) -> Model {
        parse(&self.extractor)
    }

    pub fn localizer_model(&self) -> Model {
        parse(&self.localizer)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        [
            ("models.agent", Some(self.agent.as_str())),
            ("models.weather", self.weather.as_deref()),
            ("models.food", self.food.as_deref()),
            ("models.extractor", Some(self.extractor.as_str())),
            ("models.localizer", Some(self.localizer.as_str())),
        ]
        .into_iter()
        .filter(|(_, name)| name.is_some_and(|n| n.trim().is_empty()))
        .map(|(field, _)| ConfigValidationError::EmptyModelName(field))
        .collect()
    }
}
