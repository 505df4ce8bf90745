//! HTTP server layer
//!
//! Axum server with:
//! - Exact-path routes, any method
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error bodies

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
