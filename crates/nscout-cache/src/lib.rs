//! Process-local TTL cache shared by the analysis components.
//!
//! Values are stored as `serde_json::Value` so one cache instance can serve
//! every component. Staleness is checked on read: a stale entry is removed
//! and counted as a miss. A periodic sweep can reclaim entries that are
//! never read again.

pub mod key;

pub use key::cache_key;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

/// Default entry TTL: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry {
    value: Value,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_fresh(&self, now: Instant) -> bool {
        now.duration_since(self.inserted_at) < self.ttl
    }
}

/// Cache performance counters.
///
/// `hits` and `misses` are monotonic; `entries` is the live entry count at
/// the time of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub entries: usize,
}

/// TTL cache keyed by opaque strings.
///
/// Writers race with last-writer-wins semantics; no ordering is promised
/// across keys.
pub struct TtlCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TtlCache {
    /// Create a cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get a value if present and fresh. A stale entry is removed and the
    /// lookup counts as a miss.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.is_fresh(now) => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!(key, "cache hit");
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => {
                    self.misses.fetch_add(1, Ordering::Relaxed);
                    debug!(key, "cache miss");
                    return None;
                }
            }
        }

        // Entry exists but is stale: upgrade to a write lock and remove it.
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.is_fresh(Instant::now()) {
                // Another writer refreshed the key while we waited.
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            entries.remove(key);
            debug!(key, "cache entry expired");
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Unconditionally store a value with the default TTL.
    pub async fn set(&self, key: &str, value: Value) {
        self.set_with_ttl(key, value, self.default_ttl).await;
    }

    /// Unconditionally store a value with a per-entry TTL.
    pub async fn set_with_ttl(&self, key: &str, value: Value, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
        debug!(key, ttl_secs = ttl.as_secs(), "cache set");
    }

    /// Typed read: deserialize a cached value into `T`.
    ///
    /// An entry that no longer deserializes (schema drift across versions)
    /// is treated as absent.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key).await?;
        serde_json::from_value(value).ok()
    }

    /// Typed write with the default TTL.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.set(key, value).await;
        }
    }

    /// Typed write with a per-entry TTL.
    pub async fn set_json_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        if let Ok(value) = serde_json::to_value(value) {
            self.set_with_ttl(key, value, ttl).await;
        }
    }

    /// Remove all stale entries, returning how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "swept expired cache entries");
        }
        removed
    }

    /// Snapshot of the counters.
    pub async fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            entries: self.entries.read().await.len(),
        }
    }

    /// Live entry count.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
