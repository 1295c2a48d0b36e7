//! Domain layer for city-concierge
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! An ordered, append-only list of [`Message`]s owned by a single agent
//! invocation. Ordering decides what context the model sees.
//!
//! ## Tools
//!
//! A [`Tool`] couples a [`ToolDefinition`] (the schema the model sees) with an
//! executable. Calls requested by the model arrive as [`ToolCall`]s and are
//! validated against the definition before anything runs.
//!
//! ## Topics
//!
//! Every agent answers for one [`Topic`] (weather or food). The topic supplies
//! the section label the router prints and the prefix of failure messages.

pub mod agent;
pub mod core;
pub mod prompt;
pub mod report;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use agent::{
    config::{AgentConfig, ModelParams},
    value_objects::{QueryResult, Topic},
};
pub use core::model::Model;
pub use prompt::{FALLBACK_MESSAGE, PromptTemplate};
pub use report::{article::Article, weather::WeatherReport};
pub use session::entities::{Conversation, Message, Role};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    provider::Tool,
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolOutput},
};
