//! Rate Limiter Prune Task
//!
//! Background task that periodically drops rate-limiter clients whose
//! recorded requests have all aged out of the window. Without it the
//! limiter's bookkeeping grows with every distinct client key ever
//! seen, including spoofed one-off `X-Forwarded-For` values.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::security::SharedRateLimiter;

/// Spawns a background task that periodically prunes idle clients.
///
/// The task loops forever, sleeping `prune_interval_secs` between
/// sweeps. It is aborted via the returned handle during graceful
/// shutdown.
pub fn spawn_limiter_prune_task(
    limiter: SharedRateLimiter,
    prune_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(prune_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting rate-limiter prune task with interval of {} seconds",
            prune_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let dropped = limiter.write().await.prune_stale();

            if dropped > 0 {
                info!("Limiter prune: dropped {} idle clients", dropped);
            } else {
                debug!("Limiter prune: no idle clients found");
            }
        }
    })
}
