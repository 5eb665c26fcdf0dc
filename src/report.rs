//! Plain-text report printed by the CLI.

use crate::outfit::OutfitRecommendation;
use crate::refresh::RefreshOutcome;
use crate::units::TemperatureUnit;

/// Formats an age in seconds as e.g. "45s", "12 min", "3 h 5 min".
pub fn format_age(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{} min", seconds / 60)
    } else {
        format!("{} h {} min", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Renders conditions, freshness and the outfit as multi-line text.
pub fn render(
    outcome: &RefreshOutcome,
    outfit: &OutfitRecommendation,
    temperature_unit: TemperatureUnit,
) -> String {
    let reading = &outcome.reading;
    let condition = reading.condition();

    let mut lines = Vec::new();

    let mut headline = format!(
        "{} {}, {:.1}{}, wind {:.1} {}",
        condition.icon,
        condition.description,
        temperature_unit.convert_from_celsius(reading.temperature_c),
        temperature_unit.symbol(),
        reading.wind_speed,
        reading.wind_unit.label(),
    );
    if let Some(uv) = reading.uv_index {
        headline.push_str(&format!(", UV {:.1}", uv));
    }
    lines.push(headline);

    if outcome.offline {
        let mut notice = format!(
            "Offline: showing conditions from {} ago",
            format_age(outcome.age_seconds)
        );
        if outcome.stale {
            notice.push_str(" (stale)");
        }
        lines.push(notice);
    }

    lines.push(String::new());
    lines.push(format!("What to wear ({}):", outfit.bucket.label()));
    for item in &outfit.base_items {
        lines.push(format!("  {} {}", item.icon, item.label));
    }

    if !outfit.modifiers.is_empty() {
        lines.push("Also bring:".to_string());
        for modifier in &outfit.modifiers {
            lines.push(format!("  {} {}", modifier.icon(), modifier.label()));
        }
    }

    lines.join("\n")
}
