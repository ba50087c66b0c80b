//! API Module
//!
//! HTTP surface for the cache service: router, handlers, shared state.

mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::create_router;
