//! Unit conversions for wind speed and temperature
//!
//! Every outfit threshold is expressed in km/h and °C. Readings arrive in whatever
//! unit the provider was asked for, so they are normalized here before any
//! comparison is made.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wind speed at or above which a reading counts as windy, in km/h
pub const WINDY_THRESHOLD_KMH: f64 = 15.0;

/// Miles per kilometre
const MPH_PER_KMH: f64 = 0.621371;

/// km/h per m/s
const KMH_PER_MS: f64 = 3.6;

/// km/h per knot
const KMH_PER_KNOT: f64 = 1.852;

/// Errors raised when a unit name cannot be understood
#[derive(Debug, Error)]
pub enum UnitError {
    /// The wind unit name is not one of the supported units
    #[error("Unknown wind unit: '{0}'. Valid units: kmh, mph, ms, kn")]
    UnknownWindUnit(String),
}

/// Units a wind speed can be reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindUnit {
    /// Kilometres per hour
    #[default]
    Kmh,
    /// Miles per hour
    Mph,
    /// Metres per second
    Ms,
    /// Knots
    Kn,
}

impl WindUnit {
    /// Returns a slice containing all wind units.
    pub fn all() -> &'static [WindUnit] {
        &[WindUnit::Kmh, WindUnit::Mph, WindUnit::Ms, WindUnit::Kn]
    }

    /// Query parameter value understood by Open-Meteo's `wind_speed_unit`.
    pub fn api_param(&self) -> &'static str {
        match self {
            WindUnit::Kmh => "kmh",
            WindUnit::Mph => "mph",
            WindUnit::Ms => "ms",
            WindUnit::Kn => "kn",
        }
    }

    /// Short label for display next to a number.
    pub fn label(&self) -> &'static str {
        match self {
            WindUnit::Kmh => "km/h",
            WindUnit::Mph => "mph",
            WindUnit::Ms => "m/s",
            WindUnit::Kn => "kn",
        }
    }

    /// Parses a user-supplied unit name, rejecting anything unrecognized.
    ///
    /// Matching is case-insensitive and accepts both the short names
    /// (`kmh`, `mph`, `ms`, `kn`) and the display labels (`km/h`, `m/s`, `knots`).
    pub fn parse(s: &str) -> Result<WindUnit, UnitError> {
        match s.trim().to_lowercase().as_str() {
            "kmh" | "km/h" | "kph" => Ok(WindUnit::Kmh),
            "mph" | "mp/h" => Ok(WindUnit::Mph),
            "ms" | "m/s" => Ok(WindUnit::Ms),
            "kn" | "kt" | "kts" | "knots" => Ok(WindUnit::Kn),
            _ => Err(UnitError::UnknownWindUnit(s.to_string())),
        }
    }

    /// Parses a unit label reported by a weather provider.
    ///
    /// Unlike [`WindUnit::parse`] this never fails: an unrecognized label is
    /// treated as km/h, which is what the provider returns when no unit was
    /// requested. A warning is logged so the mismatch is visible.
    pub fn from_label(label: &str) -> WindUnit {
        WindUnit::parse(label).unwrap_or_else(|_| {
            tracing::warn!(label, "unrecognized wind unit label, assuming km/h");
            WindUnit::Kmh
        })
    }
}

/// Units a temperature can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a Celsius value into this unit.
    pub fn convert_from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Converts a wind speed in the given unit to km/h.
pub fn to_kmh(speed: f64, unit: WindUnit) -> f64 {
    match unit {
        WindUnit::Kmh => speed,
        WindUnit::Mph => speed / MPH_PER_KMH,
        WindUnit::Ms => speed * KMH_PER_MS,
        WindUnit::Kn => speed * KMH_PER_KNOT,
    }
}

/// Converts a wind speed in km/h to the given unit. Inverse of [`to_kmh`].
pub fn from_kmh(kmh: f64, unit: WindUnit) -> f64 {
    match unit {
        WindUnit::Kmh => kmh,
        WindUnit::Mph => kmh * MPH_PER_KMH,
        WindUnit::Ms => kmh / KMH_PER_MS,
        WindUnit::Kn => kmh / KMH_PER_KNOT,
    }
}

/// Returns true when the wind speed, once normalized, reaches [`WINDY_THRESHOLD_KMH`].
pub fn is_windy(speed: f64, unit: WindUnit) -> bool {
    to_kmh(speed, unit) >= WINDY_THRESHOLD_KMH
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_kmh_is_identity() {
        assert_eq!(to_kmh(42.0, WindUnit::Kmh), 42.0);
        assert_eq!(from_kmh(42.0, WindUnit::Kmh), 42.0);
    }

    #[test]
    fn test_conversion_factors() {
        assert!((to_kmh(10.0, WindUnit::Ms) - 36.0).abs() < EPSILON);
        assert!((to_kmh(10.0, WindUnit::Kn) - 18.52).abs() < EPSILON);
        assert!((to_kmh(0.621371, WindUnit::Mph) - 1.0).abs() < EPSILON);
        assert!((to_kmh(10.0, WindUnit::Mph) - 16.0934).abs() < 1e-3);
    }

    #[test]
    fn test_mph_round_trip_recovers_input() {
        for x in [0.0, 1.0, 9.3, 15.0, 27.75, 120.0] {
            let mph = from_kmh(x, WindUnit::Mph);
            assert!(
                (to_kmh(mph, WindUnit::Mph) - x).abs() < EPSILON,
                "round trip failed for {} km/h",
                x
            );
        }
    }

    #[test]
    fn test_round_trip_for_every_unit() {
        for &unit in WindUnit::all() {
            let speed = 23.4;
            let back = from_kmh(to_kmh(speed, unit), unit);
            assert!((back - speed).abs() < EPSILON, "{:?} did not round trip", unit);
        }
    }

    #[test]
    fn test_windy_boundary_is_inclusive() {
        assert!(is_windy(15.0, WindUnit::Kmh));
        assert!(!is_windy(14.9, WindUnit::Kmh));
    }

    #[test]
    fn test_windy_after_normalization() {
        // 10 mph is about 16.1 km/h
        assert!(is_windy(10.0, WindUnit::Mph));
        // 4 m/s is 14.4 km/h
        assert!(!is_windy(4.0, WindUnit::Ms));
        // 9 knots is 16.668 km/h
        assert!(is_windy(9.0, WindUnit::Kn));
    }

    #[test]
    fn test_parse_accepts_names_and_labels() {
        assert_eq!(WindUnit::parse("kmh").unwrap(), WindUnit::Kmh);
        assert_eq!(WindUnit::parse("KM/H").unwrap(), WindUnit::Kmh);
        assert_eq!(WindUnit::parse("mph").unwrap(), WindUnit::Mph);
        assert_eq!(WindUnit::parse("mp/h").unwrap(), WindUnit::Mph);
        assert_eq!(WindUnit::parse("m/s").unwrap(), WindUnit::Ms);
        assert_eq!(WindUnit::parse(" knots ").unwrap(), WindUnit::Kn);
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let err = WindUnit::parse("furlongs").unwrap_err();
        assert!(err.to_string().contains("furlongs"));
    }

    #[test]
    fn test_from_label_falls_back_to_kmh() {
        assert_eq!(WindUnit::from_label("mp/h"), WindUnit::Mph);
        assert_eq!(WindUnit::from_label("beaufort"), WindUnit::Kmh);
        assert_eq!(WindUnit::from_label(""), WindUnit::Kmh);
    }

    #[test]
    fn test_api_param_parses_back() {
        for &unit in WindUnit::all() {
            assert_eq!(WindUnit::parse(unit.api_param()).unwrap(), unit);
            assert_eq!(WindUnit::parse(unit.label()).unwrap(), unit);
        }
    }

    #[test]
    fn test_temperature_conversions() {
        assert!((celsius_to_fahrenheit(0.0) - 32.0).abs() < EPSILON);
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < EPSILON);
        assert!((fahrenheit_to_celsius(-40.0) - (-40.0)).abs() < EPSILON);
        assert!((fahrenheit_to_celsius(celsius_to_fahrenheit(21.3)) - 21.3).abs() < EPSILON);
    }

    #[test]
    fn test_temperature_unit_display() {
        assert_eq!(TemperatureUnit::Celsius.convert_from_celsius(5.0), 5.0);
        assert!((TemperatureUnit::Fahrenheit.convert_from_celsius(5.0) - 41.0).abs() < EPSILON);
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
    }
}
