//! Presentation layer for city-concierge
//!
//! This crate contains the CLI definition, the console formatter,
//! the waiting spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatInput, ChatRepl};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
