//! Restaurant endpoints

use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Router,
};

use crate::db::RestaurantRepo;
use crate::http::error::ApiError;
use crate::http::extractors::RestaurantId;
use crate::http::response::send_json;
use crate::models::{ListParams, RestaurantFilter};
use crate::state::AppState;

/// GET /restaurants - filtered, sorted window with the total match count
///
/// The query string is read as raw pairs so repeated or odd keys never
/// reject the request.
async fn list_restaurants(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let filter = RestaurantFilter::from(pairs.into_iter().collect::<ListParams>());
    let page = RestaurantRepo::new(state.provider())
        .list_restaurants(&filter)
        .await?;

    Ok(send_json(&page))
}

/// GET /restaurants/{id} - one restaurant with its current grade and violation
async fn get_restaurant(
    State(state): State<AppState>,
    RestaurantId(id): RestaurantId,
) -> Result<Response, ApiError> {
    let rows = RestaurantRepo::new(state.provider())
        .get_restaurant_by_id(id)
        .await?;

    let restaurant = rows.first().ok_or(ApiError::NotFound)?;
    Ok(send_json(restaurant))
}

/// Restaurant routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/{id}", get(get_restaurant))
}
