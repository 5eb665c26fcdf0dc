//! WMO weather code classification
//!
//! The code table is plain data: each row carries its description, icon, category
//! and the kind of precipitation it implies. Rain and snow membership is read off
//! the `precipitation` column, so a code can never be in both sets.
//!
//! Weather codes from WMO (World Meteorological Organization):
//! - 0-3: Clear to overcast
//! - 45, 48: Fog
//! - 51-57: Drizzle (56-57 freezing)
//! - 61-67: Rain (66-67 freezing)
//! - 71-77: Snow
//! - 80-82: Rain showers
//! - 85-86: Snow showers
//! - 95-99: Thunderstorm

use super::ConditionCategory as C;
use super::{ConditionCategory, ConditionInfo};
use self::Precipitation as P;

/// Kind of precipitation a weather code implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precipitation {
    None,
    Rain,
    Snow,
}

/// One row of the weather code table
struct ConditionRow {
    code: i32,
    description: &'static str,
    icon: &'static str,
    category: ConditionCategory,
    precipitation: Precipitation,
}

const fn row(
    code: i32,
    description: &'static str,
    icon: &'static str,
    category: ConditionCategory,
    precipitation: Precipitation,
) -> ConditionRow {
    ConditionRow {
        code,
        description,
        icon,
        category,
        precipitation,
    }
}

/// Known weather codes, sorted by code
const CONDITIONS: &[ConditionRow] = &[
    row(0, "Clear sky", "☀️", C::Clear, P::None),
    row(1, "Mainly clear", "🌤️", C::Clear, P::None),
    row(2, "Partly cloudy", "⛅", C::Cloudy, P::None),
    row(3, "Overcast", "☁️", C::Cloudy, P::None),
    row(45, "Fog", "🌫️", C::Fog, P::None),
    row(48, "Depositing rime fog", "🌫️", C::Fog, P::None),
    row(51, "Light drizzle", "🌦️", C::Rain, P::Rain),
    row(53, "Moderate drizzle", "🌦️", C::Rain, P::Rain),
    row(55, "Dense drizzle", "🌧️", C::Rain, P::Rain),
    row(56, "Light freezing drizzle", "🌧️", C::Rain, P::Rain),
    row(57, "Dense freezing drizzle", "🌧️", C::Rain, P::Rain),
    row(61, "Slight rain", "🌦️", C::Rain, P::Rain),
    row(63, "Moderate rain", "🌧️", C::Rain, P::Rain),
    row(65, "Heavy rain", "🌧️", C::Rain, P::Rain),
    row(66, "Light freezing rain", "🌧️", C::Rain, P::Rain),
    row(67, "Heavy freezing rain", "🌧️", C::Rain, P::Rain),
    row(71, "Slight snowfall", "🌨️", C::Snow, P::Snow),
    row(73, "Moderate snowfall", "🌨️", C::Snow, P::Snow),
    row(75, "Heavy snowfall", "❄️", C::Snow, P::Snow),
    row(77, "Snow grains", "🌨️", C::Snow, P::Snow),
    row(80, "Slight rain showers", "🌦️", C::Rain, P::Rain),
    row(81, "Moderate rain showers", "🌧️", C::Rain, P::Rain),
    row(82, "Violent rain showers", "⛈️", C::Rain, P::Rain),
    row(85, "Slight snow showers", "🌨️", C::Snow, P::Snow),
    row(86, "Heavy snow showers", "❄️", C::Snow, P::Snow),
    row(95, "Thunderstorm", "⛈️", C::Storm, P::Rain),
    row(96, "Thunderstorm with slight hail", "⛈️", C::Storm, P::Rain),
    row(99, "Thunderstorm with heavy hail", "⛈️", C::Storm, P::Rain),
];

/// Returned for any code not in the table
const UNKNOWN: ConditionInfo = ConditionInfo {
    description: "Unknown condition",
    icon: "❓",
    category: ConditionCategory::Unknown,
};

fn lookup(code: i32) -> Option<&'static ConditionRow> {
    CONDITIONS
        .binary_search_by_key(&code, |row| row.code)
        .ok()
        .map(|idx| &CONDITIONS[idx])
}

/// Maps a WMO weather code to its condition information.
///
/// Codes outside the table, including negative values and anything above 99,
/// resolve to the unknown condition rather than an error.
pub fn classify(code: i32) -> ConditionInfo {
    match lookup(code) {
        Some(row) => ConditionInfo {
            description: row.description,
            icon: row.icon,
            category: row.category,
        },
        None => UNKNOWN,
    }
}

/// Returns true for drizzle, rain, freezing rain, showers and thunderstorms.
pub fn is_rain_weather(code: i32) -> bool {
    lookup(code).is_some_and(|row| row.precipitation == Precipitation::Rain)
}

/// Returns true for snowfall, snow grains and snow showers.
pub fn is_snow_weather(code: i32) -> bool {
    lookup(code).is_some_and(|row| row.precipitation == Precipitation::Snow)
}
