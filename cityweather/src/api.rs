//! OpenWeatherMap current-weather client
//!
//! The reducer never calls this directly. A `FetchWeather` effect spawns a
//! task that awaits [`WeatherClient::current_temperature`] and sends the
//! outcome back to the runtime as an action.

use std::time::Duration;

use serde::Deserialize;

use crate::state::WeatherReading;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const WEATHER_PATH: &str = "/data/2.5/weather";

/// Fetch failure, formatted for the result label
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Error fetching weather data.")]
    Transport(#[source] reqwest::Error),
    #[error("Error: {0}")]
    Status(u16),
    #[error("Error reading weather data: {0}")]
    Malformed(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    /// Kelvin
    temp: f64,
}

/// Convert Kelvin to Fahrenheit
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FetchError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Current temperature for `city`, converted to Fahrenheit.
    pub async fn current_temperature(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let url = format!("{}{}", self.base_url, WEATHER_PATH);

        let mut request = self.http.get(&url).query(&[("q", city)]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("appid", key.as_str())]);
        }

        let response = request.send().await.map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        let data: CurrentWeatherResponse =
            serde_json::from_str(&body).map_err(FetchError::Malformed)?;

        Ok(WeatherReading {
            city: city.to_string(),
            fahrenheit: kelvin_to_fahrenheit(data.main.temp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_to_fahrenheit() {
        assert_eq!(format!("{:.2}", kelvin_to_fahrenheit(300.0)), "80.33");
        assert_eq!(format!("{:.2}", kelvin_to_fahrenheit(273.15)), "32.00");
        assert_eq!(format!("{:.2}", kelvin_to_fahrenheit(0.0)), "-459.67");
    }

    #[test]
    fn test_kelvin_to_fahrenheit_is_deterministic() {
        let first = kelvin_to_fahrenheit(288.71);
        for _ in 0..10 {
            assert_eq!(kelvin_to_fahrenheit(288.71), first);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "Error: 404");

        let bad = serde_json::from_str::<CurrentWeatherResponse>(r#"{"main": {}}"#).unwrap_err();
        assert!(FetchError::Malformed(bad)
            .to_string()
            .starts_with("Error reading weather data"));
    }

    #[test]
    fn test_response_requires_numeric_temp() {
        assert!(serde_json::from_str::<CurrentWeatherResponse>(r#"{"main": {"temp": "hot"}}"#)
            .is_err());
        let ok: CurrentWeatherResponse =
            serde_json::from_str(r#"{"main": {"temp": 281.5, "humidity": 40}, "name": "x"}"#)
                .unwrap();
        assert_eq!(ok.main.temp, 281.5);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WeatherClient::new("http://localhost:1234/", None, None).unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
