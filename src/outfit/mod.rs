//! Outfit recommendation engine.
//!
//! A recommendation is built in two passes: the temperature bucket selects a base
//! set of clothes from the wardrobe table, then rain, snow, wind and UV each add
//! an independent modifier on top.

mod bucket;

pub use bucket::{TemperatureBucket, BUCKET_UPPER_BOUNDS};

use crate::data::{is_rain_weather, is_snow_weather, WeatherReading};
use crate::units::is_windy;

/// UV index at or above which sun protection is recommended during the day
pub const UV_THRESHOLD: f64 = 6.0;

/// A single piece of clothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutfitItem {
    pub icon: &'static str,
    pub label: &'static str,
}

const fn item(icon: &'static str, label: &'static str) -> OutfitItem {
    OutfitItem { icon, label }
}

/// Additions triggered by conditions other than temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Any rain, drizzle or thunderstorm
    Umbrella,
    /// Any snowfall
    ScarfAndGloves,
    /// Wind at or above the windy threshold
    Windbreaker,
    /// Daytime UV at or above [`UV_THRESHOLD`]
    SunProtection,
}

impl Modifier {
    pub fn icon(&self) -> &'static str {
        match self {
            Modifier::Umbrella => "☂️",
            Modifier::ScarfAndGloves => "🧣",
            Modifier::Windbreaker => "🌬️",
            Modifier::SunProtection => "🕶️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Modifier::Umbrella => "Umbrella",
            Modifier::ScarfAndGloves => "Scarf & gloves",
            Modifier::Windbreaker => "Windbreaker",
            Modifier::SunProtection => "Sunglasses & sunscreen",
        }
    }
}

/// Base clothes for each temperature bucket
const WARDROBE: [(TemperatureBucket, &[OutfitItem]); 6] = [
    (
        TemperatureBucket::Freezing,
        &[
            item("🧥", "Heavy coat"),
            item("🧶", "Thermal layers"),
            item("👖", "Warm trousers"),
            item("🥾", "Insulated boots"),
            item("🧢", "Warm hat"),
        ],
    ),
    (
        TemperatureBucket::Cold,
        &[
            item("🧥", "Warm jacket"),
            item("🧶", "Sweater"),
            item("👖", "Long trousers"),
            item("🥾", "Boots"),
        ],
    ),
    (
        TemperatureBucket::Cool,
        &[
            item("🧥", "Light jacket"),
            item("👕", "Long-sleeve shirt"),
            item("👖", "Jeans"),
            item("👟", "Sneakers"),
        ],
    ),
    (
        TemperatureBucket::Mild,
        &[
            item("👕", "Long-sleeve shirt"),
            item("👖", "Jeans"),
            item("👟", "Sneakers"),
        ],
    ),
    (
        TemperatureBucket::Warm,
        &[
            item("👕", "T-shirt"),
            item("👖", "Light trousers"),
            item("👟", "Sneakers"),
        ],
    ),
    (
        TemperatureBucket::Hot,
        &[
            item("👕", "T-shirt"),
            item("🩳", "Shorts"),
            item("🩴", "Sandals"),
        ],
    ),
];

/// Base clothes for a bucket.
pub fn wardrobe(bucket: TemperatureBucket) -> &'static [OutfitItem] {
    WARDROBE
        .iter()
        .find(|(b, _)| *b == bucket)
        .map(|(_, items)| *items)
        .unwrap_or(&[])
}

/// What to wear for a reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitRecommendation {
    /// Temperature bucket the base items came from
    pub bucket: TemperatureBucket,
    /// Base clothes, in display order
    pub base_items: Vec<OutfitItem>,
    /// Applied modifiers, each at most once, in the order they were triggered
    pub modifiers: Vec<Modifier>,
}

impl OutfitRecommendation {
    /// Whether a modifier was applied.
    pub fn has(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// One-line text summary, e.g. "Cold: 🧥 Warm jacket, 🧶 Sweater + ☂️ Umbrella".
    pub fn summary(&self) -> String {
        let base = self
            .base_items
            .iter()
            .map(|i| format!("{} {}", i.icon, i.label))
            .collect::<Vec<_>>()
            .join(", ");

        let mut line = format!("{}: {}", self.bucket.label(), base);
        for modifier in &self.modifiers {
            line.push_str(&format!(" + {} {}", modifier.icon(), modifier.label()));
        }
        line
    }
}

/// Builds the outfit recommendation for a reading.
///
/// Modifiers are applied in a fixed order: precipitation (rain, else snow),
/// then wind, then UV. UV only counts during the day and is skipped when the
/// reading has no UV index.
pub fn compose(reading: &WeatherReading) -> OutfitRecommendation {
    let bucket = TemperatureBucket::from_celsius(reading.temperature_c);
    let base_items = wardrobe(bucket).to_vec();

    let mut modifiers = Vec::with_capacity(3);

    if is_rain_weather(reading.weather_code) {
        modifiers.push(Modifier::Umbrella);
    } else if is_snow_weather(reading.weather_code) {
        modifiers.push(Modifier::ScarfAndGloves);
    }

    if is_windy(reading.wind_speed, reading.wind_unit) {
        modifiers.push(Modifier::Windbreaker);
    }

    let strong_sun = reading.uv_index.is_some_and(|uv| uv >= UV_THRESHOLD);
    if strong_sun && reading.is_day {
        modifiers.push(Modifier::SunProtection);
    }

    OutfitRecommendation {
        bucket,
        base_items,
        modifiers,
    }
}
