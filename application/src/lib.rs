//! Application layer for city-concierge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RoutingConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    knowledge_base::{KnowledgeBase, KnowledgeBaseError},
    llm_gateway::{GatewayError, LlmGateway},
    tool_executor::{DispatchError, ToolExecutorPort},
    tool_schema::ToolSchemaPort,
    weather_provider::{ProviderError, WeatherProvider},
};
pub use use_cases::coordinator::Coordinator;
pub use use_cases::extract_city::CityExtractor;
pub use use_cases::run_agent::{Agent, AgentError};
