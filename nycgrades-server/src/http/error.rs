//! API error types with IntoResponse
//!
//! Errors are converted to plain-text responses. Every data layer
//! failure becomes a 500 carrying the underlying message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// Body sent with every 404
pub const NOT_FOUND_BODY: &str = "Not Found!";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Restaurant not found (404)
    NotFound,

    /// Database error (500, logged)
    Database(DbError),

    /// Response could not be produced (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            Self::Database(e) => {
                tracing::error!(kind = e.kind(), "Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
