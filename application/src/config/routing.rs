//! Routing configuration.

use concierge_domain::Topic;
use serde::{Deserialize, Serialize};

/// Keyword sets that decide which topic agents a query reaches.
///
/// Matching is a plain substring test against the raw query; each topic is
/// evaluated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    pub weather_keywords: Vec<String>,
    pub food_keywords: Vec<String>,
    /// City used when none can be extracted from the query
    pub default_city: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            weather_keywords: ["天気", "気温", "温度", "降水", "雨", "晴れ"]
                .map(String::from)
                .to_vec(),
            food_keywords: ["料理", "食べ物", "名物", "郷土料理", "食"]
                .map(String::from)
                .to_vec(),
            default_city: "東京".to_string(),
        }
    }
}

impl RoutingConfig {
    // ==================== Builder Methods ====================

    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    pub fn with_weather_keywords(mut self, keywords: Vec<String>) -> Self {
        self.weather_keywords = keywords;
        self
    }

    pub fn with_food_keywords(mut self, keywords: Vec<String>) -> Self {
        self.food_keywords = keywords;
        self
    }

    // ==================== Matching ====================

    pub fn keywords(&self, topic: Topic) -> &[String] {
        match topic {
            Topic::Weather => &self.weather_keywords,
            Topic::Food => &self.food_keywords,
        }
    }

    pub fn matches(&self, topic: Topic, query: &str) -> bool {
        self.keywords(topic)
            .iter()
            .map(|keyword| keyword.trim())
            .any(|keyword| !keyword.is_empty() && query.contains(keyword))
    }

    /// Topics requested by `query`, weather before food
    ///
    /// Blank keywords never match.
    pub fn matched_topics(&self, query: &str) -> Vec<Topic> {
        [Topic::Weather, Topic::Food]
            .into_iter()
            .filter(|topic| self.matches(*topic, query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routing() {
        let config = RoutingConfig::default();
        assert_eq!(config.default_city, "東京");
        assert_eq!(config.matched_topics("東京の天気は？"), vec![Topic::Weather]);
        assert_eq!(config.matched_topics("大阪の名物料理を教えて"), vec![Topic::Food]);
        assert!(config.matched_topics("こんにちは").is_empty());
    }

    #[test]
    fn test_both_topics_weather_first() {
        let config = RoutingConfig::default();
        assert_eq!(
            config.matched_topics("京都の郷土料理と明日の天気"),
            vec![Topic::Weather, Topic::Food]
        );
    }

    #[test]
    fn test_substring_semantics() {
        // "雨" inside "雨傘" still counts, as does "食" inside "食事"
        let config = RoutingConfig::default();
        assert!(config.matches(Topic::Weather, "雨傘が要りますか"));
        assert!(config.matches(Topic::Food, "食事の場所"));
    }

    #[test]
    fn test_custom_keywords() {
        let config = RoutingConfig::default()
            .with_weather_keywords(vec!["weather".to_string()])
            .with_food_keywords(vec![]);
        assert!(config.matches(Topic::Weather, "Tokyo weather"));
        assert!(!config.matches(Topic::Food, "料理"));
    }

    #[test]
    fn test_blank_keyword_never_matches() {
        let config = RoutingConfig::default()
            .with_weather_keywords(vec!["天気".to_string(), String::new(), " ".to_string()]);
        assert!(config.matched_topics("こんにちは").is_empty());
        assert_eq!(config.matched_topics("明日の天気"), vec![Topic::Weather]);
    }
}
