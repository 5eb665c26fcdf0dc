//! Single-slot cache for the last good weather reading
//!
//! Holds at most one `CacheEntry`. Every successful fetch replaces the entry
//! wholesale; a failed fetch reads it back together with its age. Nothing here
//! expires entries: callers decide what age is too old to present as current.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CacheError, Storage};
use crate::data::WeatherReading;

/// Storage key for the cached reading
const CACHE_KEY: &str = "last_reading";

/// A reading together with when it was cached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached reading
    pub reading: WeatherReading,
    /// When the reading was stored
    pub stored_at: DateTime<Utc>,
}

/// A cached reading and how long ago it was stored
#[derive(Debug, Clone, PartialEq)]
pub struct CachedReading {
    pub reading: WeatherReading,
    pub age_seconds: u64,
}

/// Cache of the most recent successfully fetched reading
///
/// Construct one per session with [`WeatherCache::load`] and pass it to whoever
/// runs refreshes.
#[derive(Debug)]
pub struct WeatherCache<S: Storage> {
    storage: S,
    entry: Option<CacheEntry>,
}

impl<S: Storage> WeatherCache<S> {
    /// Creates a cache backed by `storage`, restoring any previously stored entry.
    ///
    /// Missing, unreadable or unparseable data leaves the cache empty.
    pub fn load(storage: S) -> Self {
        let entry = match storage.read(CACHE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<CacheEntry>(&json) {
                Ok(entry) => {
                    tracing::debug!(stored_at = %entry.stored_at, "restored cached reading");
                    Some(entry)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unparseable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read weather cache");
                None
            }
        };

        Self { storage, entry }
    }

    /// Replaces the cached entry with `reading`, stamped with the current time.
    pub fn store(&mut self, reading: WeatherReading) -> Result<(), CacheError> {
        self.store_at(reading, Utc::now())
    }

    /// Replaces the cached entry with `reading`, stamped with `now`.
    ///
    /// The in-memory entry is replaced even when persisting it fails; the error
    /// is returned so the caller can report it.
    pub fn store_at(
        &mut self,
        reading: WeatherReading,
        now: DateTime<Utc>,
    ) -> Result<(), CacheError> {
        let entry = CacheEntry {
            reading,
            stored_at: now,
        };
        let json = serde_json::to_string_pretty(&entry);
        self.entry = Some(entry);

        self.storage.write(CACHE_KEY, &json?)?;
        tracing::debug!(stored_at = %now, "cached weather reading");
        Ok(())
    }

    /// The cached entry, or `None` if nothing has ever been stored.
    pub fn get(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    /// The cached reading with its age as of now.
    pub fn get_with_age(&self) -> Option<CachedReading> {
        self.get_with_age_at(Utc::now())
    }

    /// The cached reading with its age as of `now`.
    ///
    /// An entry stamped in the future (clock skew) reports an age of zero.
    pub fn get_with_age_at(&self, now: DateTime<Utc>) -> Option<CachedReading> {
        self.entry.as_ref().map(|entry| CachedReading {
            reading: entry.reading.clone(),
            age_seconds: (now - entry.stored_at).num_seconds().max(0) as u64,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the cache, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FileStorage, MemoryStorage};
    use crate::data::weather::sample_time;
    use crate::units::WindUnit;
    use chrono::Duration;
    use tempfile::TempDir;

    fn reading(temp: f64, code: i32) -> WeatherReading {
        WeatherReading::new(temp, code, 12.0, WindUnit::Kmh, Some(4.0), true, sample_time())
            .unwrap()
    }

    /// Storage whose writes always fail
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Ok(None)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), CacheError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn test_empty_cache_returns_none() {
        let cache = WeatherCache::load(MemoryStorage::new());
        assert!(cache.get().is_none());
        assert!(cache.get_with_age().is_none());
    }

    #[test]
    fn test_store_then_get_with_age_is_fresh() {
        let mut cache = WeatherCache::load(MemoryStorage::new());
        cache.store(reading(5.0, 61)).expect("Store should succeed");

        let cached = cache.get_with_age().expect("Entry should exist");
        assert_eq!(cached.reading, reading(5.0, 61));
        assert!(cached.age_seconds <= 1, "age should be about zero");
    }

    #[test]
    fn test_age_grows_with_time() {
        let mut cache = WeatherCache::load(MemoryStorage::new());
        let stored_at = sample_time();
        cache.store_at(reading(5.0, 61), stored_at).unwrap();

        let later = cache
            .get_with_age_at(stored_at + Duration::seconds(90))
            .expect("Entry should exist");
        assert_eq!(later.age_seconds, 90);

        let much_later = cache
            .get_with_age_at(stored_at + Duration::hours(3))
            .expect("Entry should exist");
        assert_eq!(much_later.age_seconds, 3 * 3600);
    }

    #[test]
    fn test_future_entry_reports_zero_age() {
        let mut cache = WeatherCache::load(MemoryStorage::new());
        let stored_at = sample_time();
        cache.store_at(reading(5.0, 61), stored_at).unwrap();

        let cached = cache
            .get_with_age_at(stored_at - Duration::seconds(30))
            .unwrap();
        assert_eq!(cached.age_seconds, 0);
    }

    #[test]
    fn test_store_replaces_whole_entry() {
        let mut cache = WeatherCache::load(MemoryStorage::new());
        let first_at = sample_time();
        let second_at = first_at + Duration::minutes(10);

        cache.store_at(reading(5.0, 61), first_at).unwrap();
        cache.store_at(reading(25.0, 0), second_at).unwrap();

        let entry = cache.get().expect("Entry should exist");
        assert_eq!(entry.reading, reading(25.0, 0));
        assert_eq!(entry.stored_at, second_at);
    }

    #[test]
    fn test_entry_survives_reload_from_file_storage() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let stored_at = sample_time();

        {
            let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
            let mut cache = WeatherCache::load(storage);
            cache.store_at(reading(-3.0, 73), stored_at).unwrap();
        }

        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf());
        let cache = WeatherCache::load(storage);
        let entry = cache.get().expect("Entry should be restored");
        assert_eq!(entry.reading, reading(-3.0, 73));
        assert_eq!(entry.stored_at, stored_at);
        assert!(temp_dir.path().join("last_reading.json").exists());
    }

    #[test]
    fn test_entry_survives_reload_from_memory_storage() {
        let mut cache = WeatherCache::load(MemoryStorage::new());
        cache.store(reading(18.0, 2)).unwrap();

        let reloaded = WeatherCache::load(cache.into_storage());
        assert_eq!(reloaded.get().unwrap().reading, reading(18.0, 2));
    }

    #[test]
    fn test_extreme_values_survive_reload() {
        let extreme = WeatherReading::new(
            -89.2,
            99,
            f64::MAX,
            WindUnit::Kn,
            Some(f64::MIN_POSITIVE),
            true,
            sample_time(),
        )
        .unwrap();

        let mut cache = WeatherCache::load(MemoryStorage::new());
        cache.store(extreme.clone()).expect("Store should succeed");

        let reloaded = WeatherCache::load(cache.into_storage());
        let entry = reloaded.get().expect("Entry should be restored");
        assert_eq!(entry.reading, extreme);
    }

    #[test]
    fn test_non_finite_reading_never_reaches_cache() {
        let result = WeatherReading::new(
            5.0,
            61,
            f64::INFINITY,
            WindUnit::Kmh,
            Some(f64::NAN),
            true,
            sample_time(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_corrupt_entry_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.write(CACHE_KEY, "{ not json").unwrap();

        let cache = WeatherCache::load(storage);
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_failed_persist_still_updates_slot() {
        let mut cache = WeatherCache::load(BrokenStorage);
        let result = cache.store(reading(10.0, 3));

        assert!(matches!(result, Err(CacheError::Io(_))));
        assert_eq!(cache.get().unwrap().reading, reading(10.0, 3));
    }

    #[test]
    fn test_persisted_format_is_cache_entry_json() {
        let mut cache = WeatherCache::load(MemoryStorage::new());
        cache.store_at(reading(5.0, 61), sample_time()).unwrap();

        let json = cache.storage().read(CACHE_KEY).unwrap().expect("Value should be written");
        let entry: CacheEntry = serde_json::from_str(&json).expect("Should parse as CacheEntry");
        assert_eq!(entry.stored_at, sample_time());
        assert!(json.contains("\"stored_at\""));
        assert!(json.contains("\"reading\""));
    }
}
