//! Cache manager for persisting the fetched post set to disk
//!
//! Provides a `CacheManager` that stores serializable data as JSON files
//! stamped with their write time. Freshness is decided at read time against a
//! caller-supplied TTL, so stale entries are ignored rather than deleted and
//! the next successful fetch simply overwrites them.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached data
    data: T,
    /// When the data was cached
    cached_at: DateTime<Utc>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    #[allow(dead_code)]
    pub cached_at: DateTime<Utc>,
    /// Whether the entry's age has passed the TTL it was read against
    pub is_expired: bool,
}

/// Manages reading and writing cached data to disk
///
/// The cache manager stores data as JSON files in an XDG-compliant cache
/// directory (`~/.cache/wpreader/` on Linux). Each entry records its write
/// timestamp; `read` reports expiry against the TTL the caller passes, and
/// callers ignore expired entries.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using XDG-compliant cache directory
    ///
    /// Uses `~/.cache/wpreader/` on Linux, or equivalent XDG path on other
    /// platforms. Returns `None` if the cache directory cannot be determined
    /// (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "wpreader")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes data to the cache, stamped with the current time
    ///
    /// Unconditionally overwrites any existing entry under the same key.
    ///
    /// # Arguments
    /// * `key` - Unique identifier for the cache entry (e.g., "wordpress_posts")
    /// * `data` - The data to cache (must implement Serialize)
    pub fn write<T: Serialize>(&self, key: &str, data: &T) -> std::io::Result<()> {
        self.ensure_dir()?;

        let entry = CacheEntry {
            data,
            cached_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads data from the cache, checking freshness against `ttl`
    ///
    /// Returns `None` if the entry doesn't exist or cannot be parsed — a
    /// corrupt cache file degrades to a miss and a refetch, never an error.
    /// Returns `Some(CachedData)` with `is_expired = true` if the entry's age
    /// is at or past the TTL; callers treat that as a miss too.
    pub fn read<T: DeserializeOwned>(
        &self,
        key: &str,
        ttl: std::time::Duration,
    ) -> Option<CachedData<T>> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(path).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        let ttl = Duration::from_std(ttl).ok()?;
        let is_expired = Utc::now() - entry.cached_at >= ttl;

        Some(CachedData {
            data: entry.data,
            cached_at: entry.cached_at,
            is_expired,
        })
    }
}
