//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.
//! Expiry is enforced lazily on lookup either way; the sweep keeps
//! never-touched expired entries from sitting resident (and counted in
//! stats) indefinitely.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically removes expired entries.
///
/// The task loops forever, sleeping `cleanup_interval_secs` between
/// sweeps. It is aborted via the returned handle during graceful
/// shutdown.
pub fn spawn_cleanup_task<V: Clone + Send + Sync + 'static>(
    cache: SharedCache<V>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache: SharedCache<String> = SharedCache::new(100).unwrap();

        cache
            .put(
                "expire_soon".to_string(),
                "value".to_string(),
                Duration::from_secs(1),
            )
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for the entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Resident count drops without the key ever being touched
        assert_eq!(cache.stats().await.size, 0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache: SharedCache<String> = SharedCache::new(100).unwrap();

        cache
            .put(
                "long_lived".to_string(),
                "value".to_string(),
                Duration::from_secs(3600),
            )
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.get("long_lived").await,
            Some("value".to_string()),
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache: SharedCache<String> = SharedCache::new(100).unwrap();

        let handle = spawn_cleanup_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
