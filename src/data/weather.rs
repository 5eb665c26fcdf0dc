//! Open-Meteo weather API client
//!
//! This module fetches current conditions from the Open-Meteo API and normalizes
//! the response into a [`WeatherReading`].

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{ReadingError, WeatherReading};
use crate::units::WindUnit;

/// Base URL for the Open-Meteo API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-condition variables requested from Open-Meteo
const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,uv_index,is_day";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid time format in response
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// Response values could not form a valid reading
    #[error("Invalid reading: {0}")]
    InvalidReading(#[from] ReadingError),
}

/// Client for fetching weather data from Open-Meteo API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    wind_unit: WindUnit,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    /// Create a new WeatherClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OPEN_METEO_BASE_URL.to_string(),
            wind_unit: WindUnit::default(),
        }
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            ..Self::new()
        }
    }

    /// Request wind speeds in the given unit
    pub fn with_wind_unit(mut self, wind_unit: WindUnit) -> Self {
        self.wind_unit = wind_unit;
        self
    }

    /// Point the client at a different forecast endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions for the given coordinates
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(WeatherReading)` - Normalized reading for the location
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<WeatherReading, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current={}&wind_speed_unit={}&timezone=GMT",
            self.base_url,
            lat,
            lon,
            CURRENT_FIELDS,
            self.wind_unit.api_param()
        );

        tracing::debug!(%url, "fetching current weather");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;

        parse_current(&text)
    }
}

/// Parse an Open-Meteo response body into a reading
pub fn parse_current(body: &str) -> Result<WeatherReading, WeatherError> {
    let response: OpenMeteoResponse = serde_json::from_str(body)?;
    let current = response.current;

    let wind_unit = WindUnit::from_label(&response.current_units.wind_speed_10m);
    let observed_at = parse_datetime(&current.time)?.and_utc();

    let reading = WeatherReading::new(
        current.temperature_2m,
        current.weather_code,
        current.wind_speed_10m,
        wind_unit,
        current.uv_index,
        current.is_day != 0,
        observed_at,
    )?;

    Ok(reading)
}

/// Parse a datetime string in ISO 8601 format (e.g., "2024-07-15T05:30") to NaiveDateTime
fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M")
        .map_err(|_| WeatherError::InvalidTimeFormat(datetime_str.to_string()))
}

/// Open-Meteo API response structure
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    current_units: CurrentUnits,
    current: CurrentWeather,
}

/// Units block describing the `current` values
#[derive(Debug, Default, Deserialize)]
struct CurrentUnits {
    #[serde(default)]
    wind_speed_10m: String,
}

/// Current weather data from Open-Meteo
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    time: String,
    temperature_2m: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    #[serde(default)]
    uv_index: Option<f64>,
    is_day: u8,
}

/// Timestamp used by tests that need a known observation time
#[cfg(test)]
pub(crate) fn sample_time() -> chrono::DateTime<chrono::Utc> {
    NaiveDateTime::parse_from_str("2024-07-15T14:00", "%Y-%m-%dT%H:%M")
        .unwrap()
        .and_utc()
}
