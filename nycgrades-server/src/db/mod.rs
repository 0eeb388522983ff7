//! Database layer - connection provider, query builder and repositories
//!
//! # Design Principles
//!
//! - One pooled connection per repository call, released on every exit path
//! - Query construction is pure and separate from execution
//! - Every value is bound as a placeholder, never spliced into SQL text

pub mod error;
pub mod pool;
pub mod provider;
pub mod query;
pub mod repos;

#[cfg(test)]
pub(crate) mod scripted;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, PgProvider};
pub use provider::{Connection, ConnectionProvider};
pub use query::{SqlParam, SqlQuery};
pub use repos::*;
