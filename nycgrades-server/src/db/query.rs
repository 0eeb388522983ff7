//! SQL construction for the restaurant endpoints
//!
//! Pure functions only: nothing here touches a connection, so each
//! statement shape is testable on its own. Values are always bound
//! through numbered placeholders.

use crate::models::RestaurantFilter;

/// Restaurants joined to their current inspection, the one dated on
/// the restaurant's `last_inspection_date`.
const FROM_CURRENT_INSPECTION: &str = "FROM restaurant
INNER JOIN inspection ON restaurant.camis=inspection.camis AND restaurant.last_inspection_date=inspection.inspection_date";

/// Always-true condition used when no filter field is set
pub const MATCH_ALL: &str = "1=1";

/// A bound query value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
}

/// SQL text plus the values for its `$n` placeholders, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl SqlQuery {
    /// A query without parameters
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append a value and return its placeholder.
    fn bind(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }
}

/// Build the WHERE condition for a filter.
///
/// Predicates appear in the fixed order dba, boro, street, cuisine,
/// min grade, joined with AND. The returned `sql` has no `WHERE`.
pub fn filter_clause(filter: &RestaurantFilter) -> SqlQuery {
    let mut clause = SqlQuery::default();
    let mut predicates = Vec::new();

    if let Some(dba) = &filter.dba {
        let p = clause.bind(SqlParam::Text(contains(dba)));
        predicates.push(format!("restaurant.dba ILIKE {p}"));
    }
    if let Some(boro) = &filter.boro {
        let p = clause.bind(SqlParam::Text(boro.clone()));
        predicates.push(format!("restaurant.boro={p}"));
    }
    if let Some(street) = &filter.street {
        let p = clause.bind(SqlParam::Text(contains(street)));
        predicates.push(format!("restaurant.street ILIKE {p}"));
    }
    if let Some(cuisine) = &filter.cuisine {
        let p = clause.bind(SqlParam::Text(cuisine.clone()));
        predicates.push(format!("restaurant.cuisine={p}"));
    }
    if let Some(min_grade) = &filter.min_grade {
        let p = clause.bind(SqlParam::Text(min_grade.clone()));
        predicates.push(format!("inspection.grade<={p}"));
    }

    clause.sql = if predicates.is_empty() {
        MATCH_ALL.to_owned()
    } else {
        predicates.join(" AND ")
    };
    clause
}

/// One window of matching restaurants with their current grade.
pub fn list_query(filter: &RestaurantFilter) -> SqlQuery {
    let mut query = filter_clause(filter);
    let limit = query.bind(SqlParam::Int(filter.limit.into()));
    let offset = query.bind(SqlParam::Int(filter.offset.into()));

    query.sql = format!(
        "SELECT restaurant.restaurant_id, restaurant.dba, restaurant.boro, inspection.grade {FROM_CURRENT_INSPECTION}
WHERE {}
ORDER BY {}
LIMIT {limit} OFFSET {offset}",
        query.sql,
        filter.order.column(),
    );
    query
}

/// Number of restaurants matching the filter, as `total_count`.
pub fn count_query(filter: &RestaurantFilter) -> SqlQuery {
    let mut query = filter_clause(filter);
    query.sql = format!(
        "SELECT COUNT(*) AS total_count {FROM_CURRENT_INSPECTION}
WHERE {}",
        query.sql
    );
    query
}

/// Full record for one restaurant with its current grade and violation.
///
/// The violation description prefers a row specific to the restaurant
/// and falls back to any row for the same code.
pub fn detail_query(restaurant_id: i64) -> SqlQuery {
    let mut query = SqlQuery::default();
    let id = query.bind(SqlParam::Int(restaurant_id));

    query.sql = format!(
        "SELECT restaurant.restaurant_id, restaurant.camis, restaurant.dba, restaurant.boro, restaurant.building, restaurant.street, restaurant.zipcode, restaurant.phone, restaurant.cuisine, restaurant.last_inspection_date, inspection.grade, inspection.violation_code, COALESCE(specific.description, generic.description) AS violation_description FROM restaurant
LEFT JOIN inspection ON restaurant.camis=inspection.camis AND restaurant.last_inspection_date=inspection.inspection_date
LEFT JOIN violation AS specific ON specific.violation_code=inspection.violation_code AND specific.camis=restaurant.camis
LEFT JOIN violation AS generic ON generic.violation_code=inspection.violation_code
WHERE restaurant.restaurant_id={id}
LIMIT 1"
    );
    query
}

/// Every distinct cuisine, alphabetically.
pub fn cuisines_query() -> SqlQuery {
    SqlQuery::new("SELECT DISTINCT cuisine FROM restaurant ORDER BY cuisine")
}

fn contains(value: &str) -> String {
    format!("%{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;

    fn text(value: &str) -> SqlParam {
        SqlParam::Text(value.to_owned())
    }

    fn full_filter() -> RestaurantFilter {
        RestaurantFilter {
            dba: Some("Indian Restaurant".into()),
            boro: Some("Manhattan".into()),
            street: Some("5 Avenue".into()),
            cuisine: Some("Indian".into()),
            min_grade: Some("C".into()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_filter_matches_all() {
        let clause = filter_clause(&RestaurantFilter::default());
        assert_eq!(clause.sql, "1=1");
        assert!(clause.params.is_empty());
    }

    #[test]
    fn single_field_adds_one_predicate() {
        let clause = filter_clause(&RestaurantFilter {
            cuisine: Some("Thai".into()),
            ..Default::default()
        });
        assert_eq!(clause.sql, "restaurant.cuisine=$1");
        assert_eq!(clause.params, vec![text("Thai")]);
    }

    #[test]
    fn fields_joined_in_fixed_order() {
        let clause = filter_clause(&full_filter());
        assert_eq!(
            clause.sql,
            "restaurant.dba ILIKE $1 AND restaurant.boro=$2 AND restaurant.street ILIKE $3 AND restaurant.cuisine=$4 AND inspection.grade<=$5"
        );
        assert_eq!(
            clause.params,
            vec![
                text("%Indian Restaurant%"),
                text("Manhattan"),
                text("%5 Avenue%"),
                text("Indian"),
                text("C"),
            ]
        );
    }

    #[test]
    fn values_never_reach_sql_text() {
        let clause = filter_clause(&RestaurantFilter {
            dba: Some("x' OR '1'='1".into()),
            ..Default::default()
        });
        assert_eq!(clause.sql, "restaurant.dba ILIKE $1");
        assert!(!clause.sql.contains("OR"));
    }

    #[test]
    fn list_query_without_filters() {
        let query = list_query(&RestaurantFilter::default());
        assert_eq!(
            query.sql,
            "SELECT restaurant.restaurant_id, restaurant.dba, restaurant.boro, inspection.grade FROM restaurant
INNER JOIN inspection ON restaurant.camis=inspection.camis AND restaurant.last_inspection_date=inspection.inspection_date
WHERE 1=1
ORDER BY restaurant.dba
LIMIT $1 OFFSET $2"
        );
        assert_eq!(query.params, vec![SqlParam::Int(999), SqlParam::Int(0)]);
    }

    #[test]
    fn list_query_with_filters_numbers_pagination_last() {
        let query = list_query(&RestaurantFilter {
            offset: 40,
            limit: 20,
            ..full_filter()
        });
        assert!(query.sql.ends_with("ORDER BY restaurant.dba\nLIMIT $6 OFFSET $7"));
        assert_eq!(query.params.len(), 7);
        assert_eq!(query.params[5], SqlParam::Int(20));
        assert_eq!(query.params[6], SqlParam::Int(40));
    }

    #[test]
    fn order_column_follows_sort_key() {
        let by = |order| {
            list_query(&RestaurantFilter {
                order,
                ..Default::default()
            })
            .sql
        };
        assert!(by(SortOrder::Boro).contains("ORDER BY restaurant.boro\n"));
        assert!(by(SortOrder::Grade).contains("ORDER BY inspection.grade\n"));
        assert!(by(SortOrder::Dba).contains("ORDER BY restaurant.dba\n"));
    }

    #[test]
    fn count_query_ignores_order_and_window() {
        let query = count_query(&RestaurantFilter {
            order: SortOrder::Grade,
            offset: 10,
            limit: 5,
            ..full_filter()
        });
        assert_eq!(
            query.sql,
            "SELECT COUNT(*) AS total_count FROM restaurant
INNER JOIN inspection ON restaurant.camis=inspection.camis AND restaurant.last_inspection_date=inspection.inspection_date
WHERE restaurant.dba ILIKE $1 AND restaurant.boro=$2 AND restaurant.street ILIKE $3 AND restaurant.cuisine=$4 AND inspection.grade<=$5"
        );
        assert_eq!(query.params.len(), 5);
    }

    #[test]
    fn detail_query_binds_id_and_coalesces_description() {
        let query = detail_query(42);
        assert_eq!(query.params, vec![SqlParam::Int(42)]);
        assert!(query.sql.contains("WHERE restaurant.restaurant_id=$1\nLIMIT 1"));
        assert!(query
            .sql
            .contains("COALESCE(specific.description, generic.description) AS violation_description"));
    }

    #[test]
    fn detail_fallback_joins_on_code_only() {
        let query = detail_query(1);
        assert!(query.sql.contains(
            "LEFT JOIN violation AS specific ON specific.violation_code=inspection.violation_code AND specific.camis=restaurant.camis\n"
        ));
        assert!(query.sql.contains(
            "LEFT JOIN violation AS generic ON generic.violation_code=inspection.violation_code\n"
        ));
        assert!(!query.sql.contains("generic.camis"));
    }

    #[test]
    fn cuisines_query_is_distinct_and_sorted() {
        let query = cuisines_query();
        assert_eq!(
            query.sql,
            "SELECT DISTINCT cuisine FROM restaurant ORDER BY cuisine"
        );
        assert!(query.params.is_empty());
    }
}
