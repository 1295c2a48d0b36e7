//! Ports (interfaces) for external dependencies
//!
//! Traits the infrastructure layer implements. Use cases only ever see these.

pub mod conversation_logger;
pub mod knowledge_base;
pub mod llm_gateway;
pub mod tool_executor;
pub mod tool_schema;
pub mod weather_provider;
