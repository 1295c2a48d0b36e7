//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types at the edges.

mod logging;
mod models;
mod providers;
mod router;

pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use providers::{
    FileOpenAiConfig, FileOpenWeatherConfig, FileProvidersConfig, FileWikipediaConfig,
};
pub use router::FileRouterConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("{0}: timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("{0}: model name cannot be empty")]
    EmptyModelName(&'static str),

    #[error("{0}: keyword list cannot be empty")]
    EmptyKeywords(&'static str),

    #[error("{0}: keywords cannot be blank")]
    BlankKeyword(&'static str),

    #[error("router.default_city cannot be empty")]
    EmptyDefaultCity,

    #[error("{0}: api_key_env cannot be empty")]
    EmptyApiKeyEnv(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Models used by the agents and helper calls
    pub models: FileModelsConfig,
    /// Keyword routing
    pub router: FileRouterConfig,
    /// External services
    pub providers: FileProvidersConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        issues.extend(self.models.validate());
        issues.extend(self.router.validate());
        issues.extend(self.providers.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[models]
agent = "gpt-4o"
temperature = 0.3
food = "gpt-4o-mini"
extractor = "gpt-4o-mini"

[router]
weather_keywords = ["天気", "weather"]
default_city = "大阪"

[providers.openai]
base_url = "http://localhost:8080/v1"
timeout_seconds = 10

[providers.openweather]
lang = "en"

[providers.wikipedia]
lang = "ja"

[logging]
conversation_log = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.weather_params().model, Model::Gpt4o);
        assert_eq!(config.models.weather_params().temperature, 0.3);
        assert_eq!(config.models.food_params().model, Model::Gpt4oMini);
        assert_eq!(config.models.extractor_model(), Model::Gpt4oMini);
        assert_eq!(config.router.weather_keywords, vec!["天気", "weather"]);
        assert_eq!(config.router.default_city, "大阪");
        assert_eq!(config.providers.openai.base_url, "http://localhost:8080/v1");
        assert_eq!(config.providers.openai.timeout_seconds, 10);
        assert_eq!(config.providers.openai.api_key_env, "OPEN_AI_KEY");
        assert_eq!(config.providers.openweather.lang, "en");
        assert_eq!(config.providers.wikipedia.lang, "ja");
        assert!(!config.logging.conversation_log);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.models.weather_params().model, Model::Gpt4);
        assert_eq!(config.models.weather_params().temperature, 0.7);
        assert_eq!(config.models.extractor_model(), Model::Gpt35Turbo);
        assert_eq!(config.router.default_city, "東京");
        assert_eq!(config.providers.openweather.api_key_env, "OPENWEATHER_KEY");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[models]
agent = " "

[router]
food_keywords = []
default_city = ""

[providers.openai]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert!(issues.contains(&ConfigValidationError::EmptyModelName("models.agent")));
        assert!(issues.contains(&ConfigValidationError::EmptyKeywords("router.food_keywords")));
        assert!(issues.contains(&ConfigValidationError::EmptyDefaultCity));
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout("providers.openai")));
    }
}
