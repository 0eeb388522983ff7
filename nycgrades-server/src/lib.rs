//! nycgrades-server: HTTP API over the NYC restaurant inspection dataset
//!
//! Serves filtered restaurant listings, single restaurant details and
//! the cuisine list as JSON, reading from a Postgres database.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
