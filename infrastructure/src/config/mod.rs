//! Configuration file loading for city-concierge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CONCIERGE_*` (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./concierge.toml` or `./.concierge.toml`
//! 4. Global: `$XDG_CONFIG_HOME/city-concierge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileModelsConfig, FileOpenAiConfig,
    FileOpenWeatherConfig, FileProvidersConfig, FileRouterConfig, FileWikipediaConfig,
};
pub use loader::ConfigLoader;
