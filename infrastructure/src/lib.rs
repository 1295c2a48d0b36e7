//! Infrastructure layer for city-concierge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiError, OpenAiGateway};
pub use providers::{OpenWeatherClient, WikipediaClient};
pub use tools::{CityLocalizer, FoodTool, JsonSchemaToolConverter, ToolRegistry, WeatherTool};
