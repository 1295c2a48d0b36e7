//! Routing configuration from TOML (`[router]` section)

use super::ConfigValidationError;
use concierge_application::RoutingConfig;
use serde::{Deserialize, Serialize};

/// ```toml
/// [router]
/// weather_keywords = ["天気", "気温", "温度", "降水", "雨", "晴れ"]
/// food_keywords = ["料理", "食べ物", "名物", "郷土料理", "食"]
/// default_city = "東京"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    pub weather_keywords: Vec<String>,
    pub food_keywords: Vec<String>,
    pub default_city: String,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        let routing = RoutingConfig::default();
        Self {
            weather_keywords: routing.weather_keywords,
            food_keywords: routing.food_keywords,
            default_city: routing.default_city,
        }
    }
}

impl FileRouterConfig {
    pub fn to_routing_config(&self) -> RoutingConfig {
        RoutingConfig::default()
            .with_weather_keywords(self.weather_keywords.clone())
            .with_food_keywords(self.food_keywords.clone())
            .with_default_city(self.default_city.trim())
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        for (field, keywords) in [
            ("router.weather_keywords", &self.weather_keywords),
            ("router.food_keywords", &self.food_keywords),
        ] {
            if keywords.is_empty() {
                issues.push(ConfigValidationError::EmptyKeywords(field));
            } else if keywords.iter().any(|k| k.trim().is_empty()) {
                issues.push(ConfigValidationError::BlankKeyword(field));
            }
        }
        if self.default_city.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyDefaultCity);
        }
        issues
    }
}
