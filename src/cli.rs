//! Command-line interface parsing for outfitcast
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! the validated [`AppConfig`] the rest of the application runs on.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::refresh::RefreshConfig;
use crate::units::{TemperatureUnit, UnitError, WindUnit};

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// Latitude outside -90..=90
    #[error("Invalid latitude: {0}. Must be between -90 and 90")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180
    #[error("Invalid longitude: {0}. Must be between -180 and 180")]
    InvalidLongitude(f64),

    /// Watch interval of zero minutes, or too long to represent
    #[error("Invalid watch interval: {0} minutes. Must be at least 1 minute")]
    InvalidWatchInterval(u64),

    /// Stale threshold too long to represent
    #[error("Invalid stale threshold: {0} minutes")]
    InvalidStaleAfter(u64),
}

/// outfitcast - what to wear for the weather outside
#[derive(Parser, Debug)]
#[command(name = "outfitcast")]
#[command(about = "Recommends what to wear for current weather, even when offline")]
#[command(version)]
pub struct Cli {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Wind speed unit to request and display
    ///
    /// Valid units: kmh, mph, ms, kn
    #[arg(long, value_name = "UNIT", default_value = "kmh", value_parser = parse_wind_unit_arg)]
    pub wind_unit: WindUnit,

    /// Show temperatures in Fahrenheit
    #[arg(long)]
    pub fahrenheit: bool,

    /// Minutes after which an offline reading is flagged as stale
    #[arg(long, value_name = "MINUTES", default_value_t = 30)]
    pub stale_after: u64,

    /// Keep running and refresh every MINUTES
    #[arg(long, value_name = "MINUTES")]
    pub watch: Option<u64>,

    /// Directory for the offline cache (defaults to the platform cache directory)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Validated configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub wind_unit: WindUnit,
    pub temperature_unit: TemperatureUnit,
    pub refresh: RefreshConfig,
    /// Refresh interval when running continuously
    pub watch: Option<Duration>,
    pub cache_dir: Option<PathBuf>,
}

/// Parses a wind unit argument into a WindUnit.
///
/// # Returns
/// * `Ok(WindUnit)` if the string names a supported unit
/// * `Err(UnitError::UnknownWindUnit)` otherwise
pub fn parse_wind_unit_arg(s: &str) -> Result<WindUnit, UnitError> {
    WindUnit::parse(s)
}

impl AppConfig {
    /// Creates an AppConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(AppConfig)` with validated settings
    /// * `Err(CliError)` if coordinates or either interval are out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if !(-90.0..=90.0).contains(&cli.lat) {
            return Err(CliError::InvalidLatitude(cli.lat));
        }
        if !(-180.0..=180.0).contains(&cli.lon) {
            return Err(CliError::InvalidLongitude(cli.lon));
        }

        let watch = match cli.watch {
            None => None,
            Some(0) => return Err(CliError::InvalidWatchInterval(0)),
            Some(minutes) => match minutes_to_duration(minutes) {
                Some(every) => Some(every),
                None => return Err(CliError::InvalidWatchInterval(minutes)),
            },
        };

        let stale_after = minutes_to_duration(cli.stale_after)
            .ok_or(CliError::InvalidStaleAfter(cli.stale_after))?;

        let temperature_unit = if cli.fahrenheit {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        };

        Ok(AppConfig {
            latitude: cli.lat,
            longitude: cli.lon,
            wind_unit: cli.wind_unit,
            temperature_unit,
            refresh: RefreshConfig { stale_after },
            watch,
            cache_dir: cli.cache_dir.clone(),
        })
    }
}

/// `None` if the minute count overflows seconds
fn minutes_to_duration(minutes: u64) -> Option<Duration> {
    minutes.checked_mul(60).map(Duration::from_secs)
}
