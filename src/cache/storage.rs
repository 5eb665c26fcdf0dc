//! Persistence backends for the weather cache
//!
//! The cache only needs `read(key)` and `write(key, value)` on string values.
//! `FileStorage` keeps one JSON file per key in an XDG-compliant cache directory;
//! `MemoryStorage` keeps values for the lifetime of the process.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::CacheError;

/// Key/value persistence used by [`super::WeatherCache`]
pub trait Storage {
    /// Returns the stored value, or `None` if nothing was ever written for `key`.
    fn read(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Replaces the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// Stores values as JSON files on disk
///
/// Uses `~/.cache/outfitcast/` on Linux, or the equivalent platform path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage in the platform cache directory.
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "outfitcast")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a FileStorage with a custom cache directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.cache_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.cache_dir)?;
        fs::write(self.cache_path(key), value)?;
        Ok(())
    }
}

/// Keeps values in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
