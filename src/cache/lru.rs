//! Recency Tracker Module
//!
//! Maintains the access ordering that decides which entry gets evicted
//! when the cache is full.

use std::collections::VecDeque;

// == Recency Tracker ==
/// Access ordering over cache keys, most recent first.
///
/// Backed by a deque: the front holds the key touched last, the back
/// holds the eviction candidate. A key appears at most once. Reordering
/// scans the deque; at the entry counts this cache targets that is an
/// acceptable trade against the bookkeeping of an intrusive list, and
/// the store's hash lookup stays O(1) either way.
///
/// Only access order is tracked here. Whether an entry is close to its
/// expiry never influences which key gets nominated for eviction.
#[derive(Debug, Default)]
pub struct RecencyTracker {
    order: VecDeque<String>,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Records an access, making `key` the most recently used.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Forgets a key. No-op for keys that are not tracked.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    // == Evict Oldest ==
    /// Removes and returns the eviction candidate, `None` when empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the eviction candidate without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    // == Clear ==
    /// Forgets every tracked key.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks whether a key is tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
