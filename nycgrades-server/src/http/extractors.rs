//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Restaurant identifier from the path.
///
/// An id that is not an integer cannot name any restaurant, so it is
/// rejected as not found rather than as a bad request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantId(pub i64);

impl<S> FromRequestParts<S> for RestaurantId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let id = id.trim().parse().map_err(|_| {
            tracing::debug!(id = %id, "non-numeric restaurant id");
            ApiError::NotFound
        })?;

        Ok(Self(id))
    }
}
