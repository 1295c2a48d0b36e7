//! External data providers
//!
//! HTTP clients implementing the [`WeatherProvider`] and [`KnowledgeBase`]
//! ports.
//!
//! [`WeatherProvider`]: concierge_application::WeatherProvider
//! [`KnowledgeBase`]: concierge_application::KnowledgeBase

pub mod openweather;
pub mod wikipedia;

pub use openweather::OpenWeatherClient;
pub use wikipedia::WikipediaClient;
