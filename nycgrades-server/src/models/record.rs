//! Row and response shapes

use serde::Serialize;

/// One result row, keyed by column name.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Filtered restaurant listing with the total number of matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPage {
    /// Rows for the requested window
    pub results: Vec<Record>,
    /// Matches across all windows
    pub total_count: i64,
}
