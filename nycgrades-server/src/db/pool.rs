//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. [`PgProvider`]
//! lends its connections through the [`ConnectionProvider`] seam.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{Column, PgPool, Postgres, Row, TypeInfo};

use super::error::DbError;
use super::provider::{Connection, ConnectionProvider};
use super::query::{SqlParam, SqlQuery};
use crate::models::Record;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/nycgrades").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Connection provider backed by a Postgres pool
#[derive(Clone)]
pub struct PgProvider {
    pool: PgPool,
}

impl PgProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionProvider for PgProvider {
    async fn acquire(&self) -> Result<Box<dyn Connection>, DbError> {
        let conn = self.pool.acquire().await.map_err(DbError::acquire)?;
        Ok(Box::new(PgPooled { conn }))
    }
}

/// Pooled connection; returns to the pool on drop.
struct PgPooled {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl Connection for PgPooled {
    async fn fetch_all(&mut self, query: &SqlQuery) -> Result<Vec<Record>, DbError> {
        let mut statement = sqlx::query(&query.sql);
        for param in &query.params {
            statement = match param {
                SqlParam::Text(value) => statement.bind(value.clone()),
                SqlParam::Int(value) => statement.bind(*value),
            };
        }

        let rows = statement
            .fetch_all(&mut *self.conn)
            .await
            .map_err(DbError::query)?;

        rows.iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbError::query)
    }
}

/// Decode a row into a JSON object by each column's SQL type.
fn row_to_record(row: &PgRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::new();
    for column in row.columns() {
        let i = column.ordinal();
        let value = match column.type_info().name() {
            "INT2" => row.try_get::<Option<i16>, _>(i)?.map(Value::from),
            "INT4" => row.try_get::<Option<i32>, _>(i)?.map(Value::from),
            "INT8" => row.try_get::<Option<i64>, _>(i)?.map(Value::from),
            "FLOAT4" => row.try_get::<Option<f32>, _>(i)?.map(Value::from),
            "FLOAT8" => row.try_get::<Option<f64>, _>(i)?.map(Value::from),
            "BOOL" => row.try_get::<Option<bool>, _>(i)?.map(Value::from),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(i)?
                .map(|d| Value::String(d.to_string())),
            "TIMESTAMP" => row
                .try_get::<Option<NaiveDateTime>, _>(i)?
                .map(|t| Value::String(t.format("%Y-%m-%dT%H:%M:%S").to_string())),
            "TIMESTAMPTZ" => row
                .try_get::<Option<DateTime<Utc>>, _>(i)?
                .map(|t| Value::String(t.to_rfc3339())),
            _ => row.try_get::<Option<String>, _>(i)?.map(Value::String),
        };
        record.insert(column.name().to_owned(), value.unwrap_or(Value::Null));
    }
    Ok(record)
}
