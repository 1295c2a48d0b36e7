//! Prompt domain
//!
//! Prompt text for the topic agents and for the deterministic helper calls
//! (city extraction and localization).

mod template;

pub use template::{FALLBACK_MESSAGE, PromptTemplate};
