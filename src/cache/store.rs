//! Cache Store Module
//!
//! The bounded expiring cache: HashMap storage combined with a recency
//! tracker for LRU eviction and per-entry TTL expiry.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, RecencyTracker};
use crate::error::{CacheError, Result};

// == Bounded Expiring Cache ==
/// Holds at most `capacity` key→value associations, each with an expiry
/// time, answering point lookups in constant expected time.
///
/// Two independent removal policies apply:
/// - capacity pressure evicts the least recently used entry,
/// - expiry makes an entry unobservable once its TTL has elapsed, with
///   physical removal happening on the next lookup of that key or via
///   [`cleanup_expired`](Self::cleanup_expired).
///
/// Eviction is by recency alone; an entry about to expire is not
/// preferred as a victim over a fresher but older-recency one.
#[derive(Debug)]
pub struct BoundedExpiringCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Recency tracker for eviction
    lru: RecencyTracker,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
}

impl<V: Clone> BoundedExpiringCache<V> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// `InvalidArgument` if `capacity` is zero. Capacity never changes
    /// after construction.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidArgument(
                "Cache capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            entries: HashMap::new(),
            lru: RecencyTracker::new(),
            stats: CacheStats::new(capacity),
            capacity,
        })
    }

    // == Put ==
    /// Stores a value under `key`, expiring `ttl` from now.
    ///
    /// Overwriting an existing key refreshes its value, expiry, and
    /// recency without evicting anything. Inserting a new key into a
    /// full cache evicts the least recently used entry first. Either
    /// way the key ends up most recently used.
    ///
    /// # Errors
    /// `InvalidArgument` if `ttl` is zero. Never clamped.
    pub fn put(&mut self, key: String, value: V, ttl: Duration) -> Result<()> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidArgument(
                "TTL must be positive".to_string(),
            ));
        }

        let is_overwrite = self.entries.contains_key(&key);

        // Evict before inserting so the bound holds at every step
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted_key) = self.lru.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.lru.touch(&key);
        self.stats.set_size(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Looks up a value by key.
    ///
    /// Returns `None` when the key is absent or its entry has expired;
    /// an expired entry is removed on detection. A live hit refreshes
    /// the key's recency, making other keys the preferred eviction
    /// victims. Hits and misses are counted.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.set_size(self.entries.len());
                self.stats.record_miss();
                None
            } else {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Invalidate ==
    /// Removes entries, returning how many were removed.
    ///
    /// `None` clears the cache entirely (capacity and counters are
    /// untouched). `Some(s)` removes every entry whose key contains `s`
    /// as a substring; zero matches is not an error.
    pub fn invalidate(&mut self, pattern: Option<&str>) -> usize {
        let removed = match pattern {
            None => {
                let count = self.entries.len();
                self.entries.clear();
                self.lru.clear();
                count
            }
            Some(pattern) => {
                let matching: Vec<String> = self
                    .entries
                    .keys()
                    .filter(|key| key.contains(pattern))
                    .cloned()
                    .collect();

                for key in &matching {
                    self.entries.remove(key);
                    self.lru.remove(key);
                }
                matching.len()
            }
        };

        self.stats.set_size(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of occupancy and counters.
    ///
    /// `size` counts resident entries; see [`CacheStats`] for how
    /// expired-but-unswept entries are treated.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes every expired resident entry.
    ///
    /// Returns the number of entries removed. Sweep removals are not
    /// counted as misses or evictions.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }

        self.stats.set_size(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
