//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod coordinator;
pub mod extract_city;
pub mod run_agent;

#[cfg(test)]
pub(crate) mod test_support;
