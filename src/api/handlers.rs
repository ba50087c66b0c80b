//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint. Handlers own
//! key construction and TTL defaulting; the cache itself knows nothing
//! about HTTP.

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::cache::SharedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    GetResponse, HealthResponse, InvalidateParams, InvalidateResponse, PutRequest, PutResponse,
    StatsResponse,
};
use crate::security::{RateLimiter, SharedRateLimiter};

/// Application state shared across all handlers.
///
/// The cache and rate limiter are constructed once at startup and
/// injected here; nothing in the process holds them as globals.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache holding arbitrary JSON values
    pub cache: SharedCache<serde_json::Value>,
    /// Shared per-client rate limiter
    pub limiter: SharedRateLimiter,
    /// TTL in seconds applied when a put request omits one
    pub default_ttl: u64,
}

impl AppState {
    /// Creates state from configuration.
    ///
    /// # Errors
    /// `InvalidArgument` if the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            cache: SharedCache::new(config.cache_capacity)?,
            limiter: RateLimiter::shared(config.rate_limit, config.rate_window),
            default_ttl: config.default_ttl,
        })
    }
}

/// Handler for PUT /cache
///
/// Stores a key-value pair with the requested TTL, falling back to the
/// configured default when the request omits one.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    req.validate()?;

    let ttl = req.ttl.unwrap_or(state.default_ttl);
    state
        .cache
        .put(req.key.clone(), req.value, Duration::from_secs(ttl))
        .await?;

    debug!(key = %req.key, ttl, "stored cache entry");
    Ok(Json(PutResponse::new(req.key, ttl)))
}

/// Handler for GET /cache/:key
///
/// Returns the stored value on a live hit; absent and expired keys are
/// both 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key).await {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /cache
///
/// Invalidates entries: everything without a `pattern` query parameter,
/// otherwise every entry whose key contains the pattern. Matching
/// nothing is a success with `removed: 0`.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Query(params): Query<InvalidateParams>,
) -> Json<InvalidateResponse> {
    let pattern = params.pattern.as_deref();
    let removed = state.cache.invalidate(pattern).await;

    debug!(removed, pattern = pattern.unwrap_or("<all>"), "invalidated cache entries");
    Json(InvalidateResponse::new(removed, pattern))
}

/// Handler for GET /stats
///
/// Returns current occupancy and hit/miss/eviction counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
///
/// Liveness probe; exempt from rate limiting.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = test_state();

        let req = PutRequest {
            key: "test_key".to_string(),
            value: json!("test_value"),
            ttl: None,
        };
        let result = put_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        let response = get_handler(State(state), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, json!("test_value"));
    }

    #[tokio::test]
    async fn test_put_defaults_ttl_from_config() {
        let state = test_state();

        let req = PutRequest {
            key: "k".to_string(),
            value: json!(1),
            ttl: None,
        };
        let response = put_handler(State(state), Json(req)).await.unwrap();
        assert_eq!(response.ttl, Config::default().default_ttl);
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invalidate_handler_pattern() {
        let state = test_state();

        for key in ["user:1", "user:2", "post:1"] {
            let req = PutRequest {
                key: key.to_string(),
                value: json!("v"),
                ttl: Some(60),
            };
            put_handler(State(state.clone()), Json(req)).await.unwrap();
        }

        let response = invalidate_handler(
            State(state.clone()),
            Query(InvalidateParams {
                pattern: Some("user".to_string()),
            }),
        )
        .await;
        assert_eq!(response.removed, 2);

        assert!(get_handler(State(state.clone()), Path("post:1".to_string()))
            .await
            .is_ok());
        assert!(get_handler(State(state), Path("user:1".to_string()))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_invalidate_handler_all() {
        let state = test_state();

        let req = PutRequest {
            key: "k".to_string(),
            value: json!("v"),
            ttl: Some(60),
        };
        put_handler(State(state.clone()), Json(req)).await.unwrap();

        let response =
            invalidate_handler(State(state.clone()), Query(InvalidateParams { pattern: None }))
                .await;
        assert_eq!(response.removed, 1);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.size, 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.size, 0);
        assert_eq!(response.capacity, Config::default().cache_capacity);
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_put_invalid_key() {
        let state = test_state();

        let req = PutRequest {
            key: "".to_string(),
            value: json!("v"),
            ttl: None,
        };
        let result = put_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_put_zero_ttl() {
        let state = test_state();

        let req = PutRequest {
            key: "k".to_string(),
            value: json!("v"),
            ttl: Some(0),
        };
        let result = put_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
    }
}
