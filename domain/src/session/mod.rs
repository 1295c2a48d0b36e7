//! Conversation domain.
//!
//! - [`entities::Message`]: a single message exchanged with the completion service
//! - [`entities::Conversation`]: the append-only message list of one agent invocation

pub mod entities;
