//! Security Module
//!
//! Request-side protections for the HTTP layer: per-client rate
//! limiting, cache-key validation, and security response headers.

mod headers;
mod rate_limit;
mod validate;

pub use headers::security_headers_middleware;
pub use rate_limit::{rate_limit_middleware, RateLimiter, SharedRateLimiter};
pub use validate::{validate_key, MAX_KEY_LENGTH};
