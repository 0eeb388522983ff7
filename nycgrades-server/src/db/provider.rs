//! Connection provider seam
//!
//! Repositories borrow one connection per call through these traits.
//! A connection is released when its handle is dropped.

use async_trait::async_trait;

use super::error::DbError;
use super::query::SqlQuery;
use crate::models::Record;

/// A borrowed database connection.
#[async_trait]
pub trait Connection: Send {
    /// Run a query and return every row.
    async fn fetch_all(&mut self, query: &SqlQuery) -> Result<Vec<Record>, DbError>;
}

/// Lends connections out of a pool.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquire a connection. Dropping the returned handle releases it.
    async fn acquire(&self) -> Result<Box<dyn Connection>, DbError>;
}
