//! Cache Statistics Module
//!
//! Snapshot of cache occupancy plus hit/miss/eviction counters.

use serde::Serialize;

// == Cache Stats ==
/// Occupancy and performance counters for a cache instance.
///
/// `size` counts resident entries. An entry past its expiry that has not
/// yet been touched or swept is still resident and still counted; it
/// disappears from `size` on the next lookup of its key or the next
/// expiry sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current number of resident entries
    pub size: usize,
    /// Maximum number of entries, fixed at construction
    pub capacity: usize,
    /// Number of lookups that returned a live value
    pub hits: u64,
    /// Number of lookups that found nothing (absent or expired)
    pub misses: u64,
    /// Number of entries evicted by capacity pressure
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates counters at zero for a cache of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Size ==
    /// Updates the resident entry count.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}
