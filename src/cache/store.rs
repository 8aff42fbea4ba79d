//! Disk-backed cache for raw API payloads
//!
//! Stores one JSON file per cache key, each wrapping the payload in an
//! envelope that records when it was written and when it expires. Reads of
//! missing, corrupt, or stale entries all degrade to "absent" so the fetch
//! pipeline never has to handle a cache fault.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default time-to-live for cache entries: 24 hours.
const DEFAULT_TTL_SECS: i64 = 24 * 60 * 60;

/// On-disk envelope wrapping a cached payload with its freshness window.
///
/// Freshness is carried inside the record rather than read off file
/// metadata, so copying or restoring cache files preserves their expiry.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope<T> {
    /// The cached payload, stored verbatim
    data: T,
    /// When the payload was written
    cached_at: DateTime<Utc>,
    /// When the entry stops being served
    expires_at: DateTime<Utc>,
}

/// Reads and writes cached payloads under a single directory
///
/// Entries are keyed by logical name (`launches`, `rockets`, ...), one
/// `<key>.json` file each, overwritten wholesale on every save. There is no
/// eviction beyond the staleness check at read time and no delete operation.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Directory holding the cache files
    cache_dir: PathBuf,
    /// Maximum age before an entry is treated as absent
    ttl: Duration,
}

impl CacheStore {
    /// Creates a store rooted at the platform cache directory
    /// (`~/.cache/launchtrack/` on Linux).
    ///
    /// Returns `None` when no home directory can be determined; the caller
    /// is expected to run uncached in that case.
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "launchtrack")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a store rooted at an explicit directory.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
        }
    }

    /// Overrides the entry time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Path of the file backing `key`.
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Loads the payload stored under `key`.
    ///
    /// Returns `Some` only when the entry exists, parses, and has not
    /// outlived its TTL. Every failure mode — missing file, unreadable
    /// file, corrupt JSON, stale entry — is logged and reported as absent;
    /// no error reaches the caller.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.cache_path(key);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("failed to read cache file {}: {}", path.display(), e);
                return None;
            }
        };

        let envelope: CacheEnvelope<T> = match serde_json::from_str(&content) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("discarding corrupt cache entry '{}': {}", key, e);
                return None;
            }
        };

        if Utc::now() > envelope.expires_at {
            debug!("cache entry '{}' is stale, treating as absent", key);
            return None;
        }

        Some(envelope.data)
    }

    /// Persists `data` under `key`, overwriting any prior entry.
    ///
    /// Failures are logged and swallowed: a save that does not stick only
    /// means no caching this round, it must never block the pipeline.
    pub fn save<T: Serialize>(&self, key: &str, data: &T) {
        if let Err(e) = fs::create_dir_all(&self.cache_dir) {
            warn!(
                "failed to create cache directory {}: {}",
                self.cache_dir.display(),
                e
            );
            return;
        }

        let now = Utc::now();
        let envelope = CacheEnvelope {
            data,
            cached_at: now,
            expires_at: now + self.ttl,
        };

        let json = match serde_json::to_string(&envelope) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize cache entry '{}': {}", key, e);
                return;
            }
        };

        let path = self.cache_path(key);
        if let Err(e) = fs::write(&path, json) {
            warn!("failed to write cache file {}: {}", path.display(), e);
        }
    }
}
