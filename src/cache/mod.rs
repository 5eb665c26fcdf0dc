//! Cache module for keeping the last good weather reading
//!
//! This module provides a single-slot cache that survives restarts through a
//! pluggable storage backend. It supports graceful degradation by handing back
//! the last reading, with its age, when a live fetch fails.

mod manager;
mod storage;

pub use manager::{CacheEntry, CachedReading, WeatherCache};
pub use storage::{FileStorage, MemoryStorage, Storage};

use thiserror::Error;

/// Errors raised while persisting or restoring the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// Reading or writing the backing store failed
    #[error("Cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The entry could not be encoded or decoded
    #[error("Cache serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
