//! Background Tasks Module
//!
//! Long-running tasks spawned at startup.

mod cleanup;
mod prune;

pub use cleanup::spawn_cleanup_task;
pub use prune::spawn_limiter_prune_task;
