//! HTTP server layer
//!
//! Axum server with:
//! - Per-response permissive CORS header on JSON payloads
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error bodies

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::send_json;
pub use server::{build_router, run_server, ServerConfig, ServerError};
