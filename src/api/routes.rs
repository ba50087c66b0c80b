//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_handler, health_handler, invalidate_handler, put_handler, stats_handler, AppState,
};
use crate::security::{rate_limit_middleware, security_headers_middleware};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache` - Store a key-value pair with a TTL
/// - `GET /cache/:key` - Retrieve a value by key
/// - `DELETE /cache` - Invalidate everything, or keys matching `?pattern=`
/// - `GET /stats` - Cache occupancy and counters
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Rate limiting on the cache and stats routes; `/health` is exempt
/// - Security headers on every response
/// - CORS: allows any origin (configurable for production)
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let limited = Router::new()
        .route("/cache", put(put_handler).delete(invalidate_handler))
        .route("/cache/:key", get(get_handler))
        .route("/stats", get(stats_handler))
        .layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .merge(limited)
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
