use serde::{Deserialize, Serialize};

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Degrees Celsius
    pub temperature: f64,
    pub description: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Metres per second
    pub wind_speed: f64,
}
