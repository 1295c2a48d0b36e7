//! Japanese → English city names for the providers

use concierge_application::ports::llm_gateway::{GatewayError, LlmGateway};
use concierge_domain::prompt::PromptTemplate;
use concierge_domain::util::contains_japanese;
use concierge_domain::{Message, Model, ModelParams};
use std::sync::Arc;
use tracing::debug;

/// Translates Japanese city names with a deterministic completion call.
///
/// Names without Japanese script pass through untouched and cost no request.
pub struct CityLocalizer {
    gateway: Arc<dyn LlmGateway>,
    params: ModelParams,
}

impl CityLocalizer {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            params: ModelParams::deterministic(Model::utility()),
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.params = ModelParams::deterministic(model);
        self
    }

    pub async fn to_english(&self, city: &str) -> Result<String, GatewayError> {
        if !contains_japanese(city) {
            return Ok(city.to_string());
        }

        let messages = [
            Message::system(PromptTemplate::localization_system()),
            Message::user(format!("都市名: {}", city)),
        ];
        let response = self.gateway.complete(&messages, &[], &self.params).await?;

        let english = response.content.trim();
        if english.is_empty() {
            return Err(GatewayError::InvalidResponse(format!(
                "empty translation for {}",
                city
            )));
        }
        debug!("Localized city: {} -> {}", city, english);
        Ok(english.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::ScriptedGateway;

    #[tokio::test]
    async fn test_japanese_name_is_translated() {
        let gateway = Arc::new(ScriptedGateway::replying(&["Tokyo\n"]));
        let localizer = CityLocalizer::new(gateway.clone());

        assert_eq!(localizer.to_english("東京").await.unwrap(), "Tokyo");
        assert_eq!(gateway.request_count(), 1);
        assert_eq!(gateway.last_params().unwrap().temperature, 0.0);
    }

    #[tokio::test]
    async fn test_latin_name_passes_through() {
        let gateway = Arc::new(ScriptedGateway::replying(&[]));
        let localizer = CityLocalizer::new(gateway.clone());

        assert_eq!(localizer.to_english("Osaka").await.unwrap(), "Osaka");
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_translation_is_error() {
        let gateway = Arc::new(ScriptedGateway::replying(&["  "]));
        let localizer = CityLocalizer::new(gateway);

        assert!(matches!(
            localizer.to_english("京都").await,
            Err(GatewayError::InvalidResponse(_))
        ));
    }
}
