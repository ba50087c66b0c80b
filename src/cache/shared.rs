//! Shared Cache Handle
//!
//! Wraps the cache in `Arc<RwLock<_>>` so request handlers and the
//! expiry sweep task can share one instance. Every operation runs
//! entirely under the lock, so an entry's value, expiry, and recency
//! position always change as a unit.

use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{BoundedExpiringCache, CacheStats};
use crate::error::Result;

// == Shared Cache ==
/// Clonable, lock-guarded handle to a [`BoundedExpiringCache`].
///
/// Instances are constructed at startup and injected wherever caching is
/// needed; there is no process-wide singleton.
#[derive(Debug, Clone)]
pub struct SharedCache<V> {
    inner: Arc<RwLock<BoundedExpiringCache<V>>>,
}

impl<V: Clone> SharedCache<V> {
    // == Constructor ==
    /// Creates a shared cache with the given capacity.
    ///
    /// # Errors
    /// `InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(BoundedExpiringCache::new(capacity)?)),
        })
    }

    // == Get ==
    /// Looks up a value; see [`BoundedExpiringCache::get`].
    ///
    /// Takes the write lock because a hit moves the key's recency and a
    /// detected-expired entry is removed.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.write().await.get(key)
    }

    // == Put ==
    /// Stores a value; see [`BoundedExpiringCache::put`].
    pub async fn put(&self, key: String, value: V, ttl: Duration) -> Result<()> {
        self.inner.write().await.put(key, value, ttl)
    }

    // == Invalidate ==
    /// Removes all entries, or those whose key contains `pattern`.
    pub async fn invalidate(&self, pattern: Option<&str>) -> usize {
        self.inner.write().await.invalidate(pattern)
    }

    // == Stats ==
    /// Returns a snapshot of occupancy and counters.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    // == Cleanup Expired ==
    /// Sweeps expired entries; returns the number removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    // == Get Or Compute ==
    /// Memoizes an expensive computation under `key`.
    ///
    /// On a hit the cached value is returned and `compute` never runs.
    /// On a miss `compute` runs, its result is stored with `ttl`, and
    /// the result is returned. The lock is not held across the
    /// computation, so two concurrent misses on the same key may both
    /// compute; that only costs latency because cached computations must
    /// be deterministic over their arguments.
    ///
    /// # Errors
    /// Propagates `compute` failures (nothing is stored) and
    /// `InvalidArgument` for a zero `ttl`.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        let value = compute().await?;
        self.put(key.to_string(), value.clone(), ttl).await?;
        Ok(value)
    }
}

// == Key Derivation ==
/// Derives a stable cache key from a computation's identity and its
/// serialized arguments.
///
/// The namespace keeps keys from unrelated computations apart and gives
/// substring invalidation something to match on (for example
/// `invalidate(Some("posts"))` drops every key derived under "posts").
pub fn derive_key(namespace: &str, args: &[&str]) -> String {
    let mut hasher = DefaultHasher::new();
    for arg in args {
        arg.hash(&mut hasher);
    }
    format!("{}:{:016x}", namespace, hasher.finish())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn test_shared_put_and_get() {
        let cache = SharedCache::new(10).unwrap();

        cache.put("key1".to_string(), "value1".to_string(), TTL).await.unwrap();

        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_shared_handles_see_same_store() {
        let cache = SharedCache::new(10).unwrap();
        let other = cache.clone();

        cache.put("key1".to_string(), 7u32, TTL).await.unwrap();

        assert_eq!(other.get("key1").await, Some(7));
        assert_eq!(other.stats().await.size, 1);
    }

    #[tokio::test]
    async fn test_get_or_compute_miss_then_hit() {
        let cache = SharedCache::new(10).unwrap();
        let key = derive_key("square", &["7"]);

        let computed = cache
            .get_or_compute(&key, TTL, || async { Ok(49u64) })
            .await
            .unwrap();
        assert_eq!(computed, 49);

        // Second call must be served from the cache, not recomputed
        let cached = cache
            .get_or_compute(&key, TTL, || async {
                panic!("compute ran on a cache hit");
            })
            .await
            .unwrap();
        assert_eq!(cached, 49);

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_get_or_compute_failure_stores_nothing() {
        let cache: SharedCache<u64> = SharedCache::new(10).unwrap();

        let result = cache
            .get_or_compute("failing", TTL, || async {
                Err(crate::error::CacheError::Internal("boom".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(cache.stats().await.size, 0);
    }

    #[tokio::test]
    async fn test_concurrent_writers_respect_capacity() {
        let cache = SharedCache::new(8).unwrap();

        let mut handles = Vec::new();
        for i in 0..32 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                cache.put(format!("key{}", i), i, TTL).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(cache.stats().await.size <= 8);
    }

    #[test]
    fn test_derive_key_stable_and_namespaced() {
        let a = derive_key("posts", &["list", "page=1"]);
        let b = derive_key("posts", &["list", "page=1"]);
        let c = derive_key("posts", &["list", "page=2"]);
        let d = derive_key("users", &["list", "page=1"]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a.starts_with("posts:"));
    }
}
