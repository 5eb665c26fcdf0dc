//! Temperature buckets driving base outfit selection.

use serde::{Deserialize, Serialize};

/// Six ordered temperature ranges, coldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBucket {
    /// At or below 0°C
    Freezing,
    /// Above 0°C up to 10°C
    Cold,
    /// Above 10°C up to 16°C
    Cool,
    /// Above 16°C up to 21°C
    Mild,
    /// Above 21°C up to 27°C
    Warm,
    /// Above 27°C
    Hot,
}

/// Inclusive upper bound (°C) of every bucket except `Hot`.
///
/// A temperature exactly on a bound belongs to the colder bucket.
pub const BUCKET_UPPER_BOUNDS: [(f64, TemperatureBucket); 5] = [
    (0.0, TemperatureBucket::Freezing),
    (10.0, TemperatureBucket::Cold),
    (16.0, TemperatureBucket::Cool),
    (21.0, TemperatureBucket::Mild),
    (27.0, TemperatureBucket::Warm),
];

impl TemperatureBucket {
    /// Returns a slice containing all buckets, coldest first.
    pub fn all() -> &'static [TemperatureBucket] {
        &[
            TemperatureBucket::Freezing,
            TemperatureBucket::Cold,
            TemperatureBucket::Cool,
            TemperatureBucket::Mild,
            TemperatureBucket::Warm,
            TemperatureBucket::Hot,
        ]
    }

    /// Picks the bucket for a temperature in Celsius.
    ///
    /// Total over every finite value. NaN compares false against every bound and
    /// lands in `Hot`; readings reject NaN before they get here.
    pub fn from_celsius(temp_c: f64) -> TemperatureBucket {
        BUCKET_UPPER_BOUNDS
            .iter()
            .find(|(upper, _)| temp_c <= *upper)
            .map(|&(_, bucket)| bucket)
            .unwrap_or(TemperatureBucket::Hot)
    }

    /// Returns a human-readable display label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBucket::Freezing => "Freezing",
            TemperatureBucket::Cold => "Cold",
            TemperatureBucket::Cool => "Cool",
            TemperatureBucket::Mild => "Mild",
            TemperatureBucket::Warm => "Warm",
            TemperatureBucket::Hot => "Hot",
        }
    }
}
