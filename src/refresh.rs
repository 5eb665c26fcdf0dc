//! Refresh orchestration
//!
//! One refresh is one fetch followed by one cache store or cache read. A
//! successful fetch is cached and returned as live data. A failed fetch falls
//! back to the cached reading, which is returned marked offline together with
//! its age. Only when the cache is empty does the fetch error reach the caller.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::cache::{Storage, WeatherCache};
use crate::data::{WeatherClient, WeatherError, WeatherReading};

/// Where a refreshed reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingSource {
    /// Fetched just now
    Live,
    /// Served from the cache after a failed fetch
    Cached,
}

/// Configuration for refresh behaviour
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Cached readings at least this old are flagged stale
    pub stale_after: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(30 * 60),
        }
    }
}

/// Result of a refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub reading: WeatherReading,
    /// Seconds since the reading was cached; zero for live data
    pub age_seconds: u64,
    pub source: ReadingSource,
    /// The live fetch failed and the reading came from the cache
    pub offline: bool,
    /// The cached reading is at least `stale_after` old
    pub stale: bool,
}

/// Applies the result of a fetch to the cache.
///
/// # Returns
/// * `Ok(RefreshOutcome)` with live data if the fetch succeeded
/// * `Ok(RefreshOutcome)` with cached data, marked offline, if the fetch failed
///   but a reading was cached earlier
/// * `Err(WeatherError)` if the fetch failed and the cache is empty
pub fn apply_fetch<S: Storage>(
    cache: &mut WeatherCache<S>,
    fetched: Result<WeatherReading, WeatherError>,
    config: &RefreshConfig,
    now: DateTime<Utc>,
) -> Result<RefreshOutcome, WeatherError> {
    match fetched {
        Ok(reading) => {
            if let Err(e) = cache.store_at(reading.clone(), now) {
                tracing::warn!(error = %e, "failed to persist weather reading");
            }
            tracing::info!(code = reading.weather_code, "weather refreshed");
            Ok(RefreshOutcome {
                reading,
                age_seconds: 0,
                source: ReadingSource::Live,
                offline: false,
                stale: false,
            })
        }
        Err(e) => match cache.get_with_age_at(now) {
            Some(cached) => {
                let stale = cached.age_seconds >= config.stale_after.as_secs();
                tracing::warn!(
                    error = %e,
                    age_seconds = cached.age_seconds,
                    stale,
                    "weather fetch failed, serving cached reading"
                );
                Ok(RefreshOutcome {
                    reading: cached.reading,
                    age_seconds: cached.age_seconds,
                    source: ReadingSource::Cached,
                    offline: true,
                    stale,
                })
            }
            None => {
                tracing::warn!(error = %e, "weather fetch failed and nothing is cached");
                Err(e)
            }
        },
    }
}

/// Fetches current weather and reconciles it with the cache.
pub async fn refresh<S: Storage>(
    client: &WeatherClient,
    cache: &mut WeatherCache<S>,
    lat: f64,
    lon: f64,
    config: &RefreshConfig,
) -> Result<RefreshOutcome, WeatherError> {
    let fetched = client.fetch_current(lat, lon).await;
    apply_fetch(cache, fetched, config, Utc::now())
}
