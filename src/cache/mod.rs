//! Cache Module
//!
//! Bounded in-memory caching with TTL expiry and LRU eviction.

mod entry;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use lru::RecencyTracker;
pub use shared::{derive_key, SharedCache};
pub use stats::CacheStats;
pub use store::BoundedExpiringCache;
