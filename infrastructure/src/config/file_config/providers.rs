//! Provider configuration from TOML (`[providers]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable holding the API key (default: "OPEN_AI_KEY").
    pub api_key_env: String,
    /// Base URL, up to and excluding `/chat/completions`.
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPEN_AI_KEY".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileOpenAiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// OpenWeatherMap current-weather API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenWeatherConfig {
    /// Environment variable holding the API key (default: "OPENWEATHER_KEY").
    pub api_key_env: String,
    pub base_url: String,
    pub units: String,
    pub lang: String,
    pub timeout_seconds: u64,
}

impl Default for FileOpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENWEATHER_KEY".to_string(),
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            units: "metric".to_string(),
            lang: "ja".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileOpenWeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Wikipedia (MediaWiki Action API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikipediaConfig {
    /// Language edition used when `api_url` is unset.
    pub lang: String,
    /// Full `api.php` URL, overriding `lang`.
    pub api_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for FileWikipediaConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            api_url: None,
            timeout_seconds: 30,
        }
    }
}

impl FileWikipediaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileOpenAiConfig,
    pub openweather: FileOpenWeatherConfig,
    pub wikipedia: FileWikipediaConfig,
}

impl FileProvidersConfig {
    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        for (section, timeout) in [
            ("providers.openai", self.openai.timeout_seconds),
            ("providers.openweather", self.openweather.timeout_seconds),
            ("providers.wikipedia", self.wikipedia.timeout_seconds),
        ] {
            if timeout == 0 {
                issues.push(ConfigValidationError::InvalidTimeout(section));
            }
        }
        for (section, env) in [
            ("providers.openai", &self.openai.api_key_env),
            ("providers.openweather", &self.openweather.api_key_env),
        ] {
            if env.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyApiKeyEnv(section));
            }
        }
        issues
    }
}
