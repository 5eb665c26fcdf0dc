//! Core data models for outfitcast
//!
//! This module contains the normalized weather reading that every other part of
//! the crate consumes, plus the weather-code classification table.

pub mod conditions;
pub mod weather;

pub use conditions::{classify, is_rain_weather, is_snow_weather};
pub use weather::{WeatherClient, WeatherError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::WindUnit;

/// Errors raised when building a reading from raw values
#[derive(Debug, Error)]
pub enum ReadingError {
    /// Temperature was NaN or infinite
    #[error("Temperature must be a finite number, got {0}")]
    NonFiniteTemperature(f64),

    /// Wind speed was NaN or infinite
    #[error("Wind speed must be a finite number, got {0}")]
    NonFiniteWindSpeed(f64),

    /// UV index was present but NaN or infinite
    #[error("UV index must be a finite number, got {0}")]
    NonFiniteUvIndex(f64),
}

/// A single normalized weather observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in Celsius
    pub temperature_c: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Wind speed, in `wind_unit`
    pub wind_speed: f64,
    /// Unit `wind_speed` is expressed in
    pub wind_unit: WindUnit,
    /// UV index, if the provider reported one
    pub uv_index: Option<f64>,
    /// Whether the observation was taken during daylight
    pub is_day: bool,
    /// When the observation was taken
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Creates a reading, rejecting non-finite measurements.
    ///
    /// JSON cannot represent NaN or infinity, so a reading holding one could be
    /// cached but never restored.
    pub fn new(
        temperature_c: f64,
        weather_code: i32,
        wind_speed: f64,
        wind_unit: WindUnit,
        uv_index: Option<f64>,
        is_day: bool,
        observed_at: DateTime<Utc>,
    ) -> Result<Self, ReadingError> {
        if !temperature_c.is_finite() {
            return Err(ReadingError::NonFiniteTemperature(temperature_c));
        }
        if !wind_speed.is_finite() {
            return Err(ReadingError::NonFiniteWindSpeed(wind_speed));
        }
        if let Some(uv) = uv_index.filter(|uv| !uv.is_finite()) {
            return Err(ReadingError::NonFiniteUvIndex(uv));
        }

        Ok(Self {
            temperature_c,
            weather_code,
            wind_speed,
            wind_unit,
            uv_index,
            is_day,
            observed_at,
        })
    }

    /// Condition information for this reading's weather code.
    pub fn condition(&self) -> ConditionInfo {
        classify(self.weather_code)
    }
}

/// Broad grouping of weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionCategory {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Storm,
    Unknown,
}

/// Display information for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    /// Human-readable description, e.g. "Moderate rain"
    pub description: &'static str,
    /// Emoji glyph for the condition
    pub icon: &'static str,
    /// Broad category
    pub category: ConditionCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-07-15T14:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_accepts_finite_temperature() {
        let reading =
            WeatherReading::new(-12.5, 71, 5.0, WindUnit::Ms, None, false, observed()).unwrap();
        assert!((reading.temperature_c - (-12.5)).abs() < 0.0001);
        assert_eq!(reading.wind_unit, WindUnit::Ms);
        assert!(reading.uv_index.is_none());
    }

    #[test]
    fn test_new_rejects_non_finite_temperature() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = WeatherReading::new(bad, 0, 0.0, WindUnit::Kmh, None, true, observed());
            assert!(matches!(result, Err(ReadingError::NonFiniteTemperature(_))));
        }
    }

    #[test]
    fn test_new_rejects_non_finite_wind_speed() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = WeatherReading::new(5.0, 61, bad, WindUnit::Kmh, None, true, observed());
            assert!(matches!(result, Err(ReadingError::NonFiniteWindSpeed(_))));
        }
    }

    #[test]
    fn test_new_rejects_non_finite_uv_index() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result =
                WeatherReading::new(5.0, 61, 10.0, WindUnit::Kmh, Some(bad), true, observed());
            assert!(matches!(result, Err(ReadingError::NonFiniteUvIndex(_))));
        }
    }

    #[test]
    fn test_reading_serialization_roundtrip() {
        let reading =
            WeatherReading::new(22.5, 2, 12.5, WindUnit::Mph, Some(7.5), true, observed()).unwrap();

        let json = serde_json::to_string(&reading).expect("Failed to serialize WeatherReading");
        assert!(json.contains("\"mph\""));

        let deserialized: WeatherReading =
            serde_json::from_str(&json).expect("Failed to deserialize WeatherReading");
        assert_eq!(deserialized, reading);
    }

    #[test]
    fn test_reading_condition_uses_code() {
        let reading =
            WeatherReading::new(5.0, 61, 10.0, WindUnit::Kmh, Some(3.0), true, observed()).unwrap();
        assert_eq!(reading.condition().category, ConditionCategory::Rain);
    }
}
