//! OpenAI Chat Completions adapter
//!
//! Implements the [`LlmGateway`](concierge_application::LlmGateway) port over
//! HTTPS. Any OpenAI-compatible endpoint works through `base_url`.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::OpenAiError;
pub use gateway::OpenAiGateway;
