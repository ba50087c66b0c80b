//! Models Module
//!
//! Request and response DTOs for the HTTP API.

mod requests;
mod responses;

pub use requests::{InvalidateParams, PutRequest};
pub use responses::{
    ErrorResponse, GetResponse, HealthResponse, InvalidateResponse, PutResponse, StatsResponse,
};
