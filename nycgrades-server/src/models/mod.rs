//! Domain models, defaulted at construction
//!
//! Query-string input is read leniently into raw params and turned
//! into typed values here. Nothing in this module rejects a request.

pub mod filter;
pub mod record;

pub use filter::{ListParams, RestaurantFilter, SortOrder, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use record::{Record, RestaurantPage};
