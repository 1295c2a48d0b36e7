//! Weather provider port

use async_trait::async_trait;
use concierge_domain::WeatherReport;
use thiserror::Error;

/// Raw failure of the weather provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for `city` (English name)
    async fn current(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}
