//! Data layer error type

use std::fmt;

/// Database error type
///
/// `Display` is the bare underlying message; the HTTP layer sends it
/// to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    /// No connection could be obtained from the pool
    #[error("{message}")]
    Acquire { message: String },

    /// A statement failed to execute or its rows failed to decode
    #[error("{message}")]
    Query { message: String },
}

impl DbError {
    /// Create an acquisition error
    pub fn acquire(message: impl fmt::Display) -> Self {
        Self::Acquire {
            message: message.to_string(),
        }
    }

    /// Create a query error
    pub fn query(message: impl fmt::Display) -> Self {
        Self::Query {
            message: message.to_string(),
        }
    }

    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Acquire { .. } => "acquire",
            Self::Query { .. } => "query",
        }
    }
}
