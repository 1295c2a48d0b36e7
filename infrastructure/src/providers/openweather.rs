//! OpenWeatherMap current-weather client

use async_trait::async_trait;
use concierge_application::ports::weather_provider::{ProviderError, WeatherProvider};
use concierge_domain::WeatherReport;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainSection,
    #[serde(default)]
    weather: Vec<Condition>,
    wind: WindSection,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    /// Missing keys surface per request, so other topics keep working
    api_key: Option<String>,
    api_key_env: String,
    units: String,
    lang: String,
}

impl OpenWeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key_env: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let api_key_env = api_key_env.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: std::env::var(&api_key_env)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            api_key_env,
            units: "metric".to_string(),
            lang: "ja".to_string(),
        })
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey(self.api_key_env.clone()))?;

        debug!("GET {}/weather q={}", self.base_url, city);

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_current(&body)
    }
}

fn parse_current(body: &str) -> Result<WeatherReport, ProviderError> {
    let payload: CurrentWeather =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    let description = payload
        .weather
        .into_iter()
        .next()
        .map(|c| c.description)
        .ok_or_else(|| ProviderError::InvalidResponse("weather list is empty".to_string()))?;

    Ok(WeatherReport {
        temperature: payload.main.temp,
        description,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_current() {
        let body = json!({
            "name": "Tokyo",
            "main": { "temp": 15.0, "feels_like": 14.2, "humidity": 55 },
            "weather": [{ "id": 800, "main": "Clear", "description": "晴天" }],
            "wind": { "speed": 3.6, "deg": 200 }
        })
        .to_string();

        let report = parse_current(&body).unwrap();
        assert_eq!(
            report,
            WeatherReport {
                temperature: 15.0,
                description: "晴天".to_string(),
                humidity: 55.0,
                wind_speed: 3.6,
            }
        );
    }

    #[test]
    fn test_parse_current_missing_fields() {
        let body = json!({ "main": { "temp": 1.0 } }).to_string();
        assert!(matches!(
            parse_current(&body),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_current_empty_weather_list() {
        let body = json!({
            "main": { "temp": 1.0, "humidity": 10 },
            "weather": [],
            "wind": { "speed": 0.5 }
        })
        .to_string();
        assert!(matches!(
            parse_current(&body),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let client = OpenWeatherClient::new(
            "http://127.0.0.1:9",
            "CONCIERGE_TEST_WEATHER_KEY_NEVER_SET",
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client.current("Tokyo").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::MissingApiKey("CONCIERGE_TEST_WEATHER_KEY_NEVER_SET".to_string())
        );
    }
}
