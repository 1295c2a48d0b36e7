//! Agent domain
//!
//! An agent answers one [`Topic`](value_objects::Topic) with a fixed system
//! prompt, a subset of the registered tools and its own model parameters.

pub mod config;
pub mod value_objects;

pub use config::{AgentConfig, ModelParams};
pub use value_objects::{QueryResult, Topic};
