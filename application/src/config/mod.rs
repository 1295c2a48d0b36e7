//! Application-level configuration.
//!
//! - [`RoutingConfig`]: keyword sets and default city used by the coordinator

pub mod routing;

pub use routing::RoutingConfig;
