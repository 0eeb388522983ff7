//! Restaurant repository
//!
//! Every call borrows one connection, runs its statements in sequence
//! and releases the connection when the handle leaves scope, whichever
//! step returned.

use serde_json::Value;

use crate::db::error::DbError;
use crate::db::provider::ConnectionProvider;
use crate::db::query;
use crate::models::{Record, RestaurantFilter, RestaurantPage};

/// Restaurant repository
pub struct RestaurantRepo<'a> {
    provider: &'a dyn ConnectionProvider,
}

impl<'a> RestaurantRepo<'a> {
    pub fn new(provider: &'a dyn ConnectionProvider) -> Self {
        Self { provider }
    }

    /// List matching restaurants and count all matches.
    ///
    /// Both statements share one connection; the count is skipped when
    /// the listing fails.
    pub async fn list_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<RestaurantPage, DbError> {
        let mut conn = self.provider.acquire().await?;

        let list = query::list_query(filter);
        tracing::debug!(sql = %list.sql, params = list.params.len(), "listing restaurants");
        let results = conn.fetch_all(&list).await?;

        let count = query::count_query(filter);
        tracing::debug!(sql = %count.sql, "counting restaurants");
        let counts = conn.fetch_all(&count).await?;

        let total_count = counts
            .first()
            .and_then(|row| row.get("total_count"))
            .and_then(Value::as_i64)
            .ok_or_else(|| DbError::query("count query returned no total_count"))?;

        tracing::debug!(rows = results.len(), total_count, "restaurants listed");
        Ok(RestaurantPage {
            results,
            total_count,
        })
    }

    /// Detail rows for one restaurant. Empty when the id matches nothing.
    pub async fn get_restaurant_by_id(&self, restaurant_id: i64) -> Result<Vec<Record>, DbError> {
        let mut conn = self.provider.acquire().await?;
        let rows = conn.fetch_all(&query::detail_query(restaurant_id)).await?;
        tracing::debug!(restaurant_id, rows = rows.len(), "restaurant lookup");
        Ok(rows)
    }

    /// Distinct cuisines in alphabetical order.
    pub async fn list_cuisines(&self) -> Result<Vec<Record>, DbError> {
        let mut conn = self.provider.acquire().await?;
        let rows = conn.fetch_all(&query::cuisines_query()).await?;
        tracing::debug!(rows = rows.len(), "cuisines listed");
        Ok(rows)
    }
}
