//! Cachebox - a bounded in-memory cache with TTL expiry and LRU eviction
//!
//! The cache itself ([`cache::BoundedExpiringCache`]) is a plain data
//! structure with no knowledge of HTTP; the `api` module is one caller
//! of it, with rate limiting and security headers from `security`.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod security;
pub mod tasks;

pub use api::AppState;
pub use cache::{BoundedExpiringCache, SharedCache};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
