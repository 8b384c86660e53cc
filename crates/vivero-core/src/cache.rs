//! Time-bounded cache for expensive dataset loads.
//!
//! The directory dataset is re-derived from raw rows on every import, so
//! callers keep one [`DatasetCache`] per dataset and consult it before
//! rebuilding. The cache holds a single value, owns no clock, and never
//! spawns timers: callers pass `now` explicitly, which keeps eviction
//! deterministic and testable.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::defaults::CACHE_TTL_SECS;

/// Hit/miss counters, cumulative over the cache lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

struct CacheEntry<T> {
    value: T,
    stored_at: DateTime<Utc>,
}

/// Single-value cache with a fixed time-to-live.
///
/// An entry is fresh while strictly less than the TTL has elapsed since
/// it was stored. A non-positive TTL disables caching entirely.
pub struct DatasetCache<T> {
    entry: Option<CacheEntry<T>>,
    ttl: Duration,
    stats: CacheStats,
}

impl<T> DatasetCache<T> {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            entry: None,
            ttl: Duration::seconds(ttl_secs),
            stats: CacheStats::default(),
        }
    }

    /// Look up the cached value, evicting it first if it has expired.
    pub fn get(&mut self, now: DateTime<Utc>) -> Option<&T> {
        let fresh = match &self.entry {
            Some(entry) => now.signed_duration_since(entry.stored_at) < self.ttl,
            None => false,
        };

        if !fresh {
            if self.entry.take().is_some() {
                debug!(
                    cache_ttl_secs = self.ttl.num_seconds(),
                    "Cache entry expired"
                );
            }
            self.stats.misses += 1;
            return None;
        }

        self.stats.hits += 1;
        self.entry.as_ref().map(|entry| &entry.value)
    }

    /// Store a value, replacing any previous entry.
    pub fn put(&mut self, value: T, now: DateTime<Utc>) {
        self.entry = Some(CacheEntry {
            value,
            stored_at: now,
        });
    }

    /// Drop the cached value regardless of age.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Check freshness without touching the counters or evicting.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match &self.entry {
            Some(entry) => now.signed_duration_since(entry.stored_at) < self.ttl,
            None => false,
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<T> Default for DatasetCache<T> {
    fn default() -> Self {
        Self::new(CACHE_TTL_SECS)
    }
}
