//! Cuisine endpoint

use axum::{extract::State, response::Response, routing::get, Router};

use crate::db::RestaurantRepo;
use crate::http::error::ApiError;
use crate::http::response::send_json;
use crate::state::AppState;

/// GET /cuisines - every distinct cuisine, alphabetically
async fn list_cuisines(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cuisines = RestaurantRepo::new(state.provider()).list_cuisines().await?;
    Ok(send_json(&cuisines))
}

/// Cuisine routes
pub fn router() -> Router<AppState> {
    Router::new().route("/cuisines", get(list_cuisines))
}
