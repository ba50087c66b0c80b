//! Rate Limiting Module
//!
//! Fixed-window request limiting, one timestamp list per client key.
//! Old timestamps are pruned on every check, so a client's budget
//! refills as its window slides past previous requests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::RwLock;
use tracing::warn;

use crate::cache::current_timestamp_ms;
use crate::error::{CacheError, Result};

/// Thread-safe handle to a [`RateLimiter`], shared across request tasks.
pub type SharedRateLimiter = Arc<RwLock<RateLimiter>>;

// == Rate Limiter ==
/// Per-key request limiter over a fixed time window.
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum requests allowed per key inside one window
    limit: usize,
    /// Window length in milliseconds
    window_ms: u64,
    /// Request timestamps (Unix milliseconds) per client key
    requests: HashMap<String, Vec<u64>>,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter allowing `limit` requests per `window_secs`.
    pub fn new(limit: usize, window_secs: u64) -> Self {
        Self {
            limit,
            window_ms: window_secs * 1000,
            requests: HashMap::new(),
        }
    }

    /// Creates a shared, lock-guarded limiter.
    pub fn shared(limit: usize, window_secs: u64) -> SharedRateLimiter {
        Arc::new(RwLock::new(Self::new(limit, window_secs)))
    }

    // == Check ==
    /// Records a request for `key` if it is within budget.
    ///
    /// Timestamps older than the window are pruned first; the request is
    /// rejected once the surviving count has reached the limit.
    ///
    /// # Errors
    /// `RateLimited` carrying the window length as `retry_after`.
    pub fn check(&mut self, key: &str) -> Result<()> {
        // Same clock the cache entries use
        let now = current_timestamp_ms();
        let window_ms = self.window_ms;

        let timestamps = self.requests.entry(key.to_string()).or_default();
        timestamps.retain(|&ts| now.saturating_sub(ts) < window_ms);

        if timestamps.len() >= self.limit {
            return Err(CacheError::RateLimited {
                retry_after: window_ms / 1000,
            });
        }

        timestamps.push(now);
        Ok(())
    }

    // == Prune Stale ==
    /// Drops clients whose recorded requests have all aged out of the
    /// window.
    ///
    /// `check` prunes only the key it is asked about, so a client that
    /// stops sending (or a spoofed one-off key) would otherwise stay in
    /// the map for the process lifetime. Returns the number of clients
    /// dropped.
    pub fn prune_stale(&mut self) -> usize {
        let now = current_timestamp_ms();
        let window_ms = self.window_ms;
        let before = self.requests.len();

        self.requests.retain(|_, timestamps| {
            timestamps.retain(|&ts| now.saturating_sub(ts) < window_ms);
            !timestamps.is_empty()
        });

        before - self.requests.len()
    }

    // == Tracked Clients ==
    /// Returns the number of client keys currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.requests.len()
    }
}

// == Middleware ==
/// Axum middleware rejecting clients that exceed their request budget.
///
/// Clients are keyed by the `X-Forwarded-For` header when present
/// (proxied deployments), falling back to the peer address.
pub async fn rate_limit_middleware(
    State(limiter): State<SharedRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);

    let decision = limiter.write().await.check(&client);
    if let Err(err) = decision {
        warn!(client = %client, "rate limit exceeded");
        return err.into_response();
    }

    next.run(request).await
}

/// Derives the limiter key for a request.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        // First hop is the original client
        if let Some(ip) = forwarded.split(',').next() {
            return ip.trim().to_string();
        }
    }

    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
