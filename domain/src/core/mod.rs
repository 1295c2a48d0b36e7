//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: language models the completion service can run

pub mod model;
