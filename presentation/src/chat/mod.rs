//! Interactive chat module
//!
//! Provides a line-editor based chat loop over the concierge.

mod repl;

pub use repl::{ChatInput, ChatRepl};
