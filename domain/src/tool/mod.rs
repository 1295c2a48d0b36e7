//! Tool domain module
//!
//! Tools give an agent capabilities beyond text generation. Every tool is
//! described by a [`ToolDefinition`] (the schema offered to the model), invoked
//! through a [`ToolCall`] and answers with a JSON [`ToolOutput`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolOutput   │
//! │ (schemas)    │    │ (invocation) │    │ (JSON value) │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Calls are checked by a [`ToolValidator`] before the executable side (the
//! [`Tool`] trait) is reached, so a malformed call never touches a provider.

pub mod entities;
pub mod provider;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use provider::Tool;
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolOutput};
