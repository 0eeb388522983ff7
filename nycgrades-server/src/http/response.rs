//! JSON response formatting

use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::ApiError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Serialize `payload` as the response body.
///
/// Sets `Access-Control-Allow-Origin: *` and a JSON content type. The
/// payload shape is left untouched.
pub fn send_json<T: Serialize + ?Sized>(payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (
            [
                (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
                (CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
            ],
            body,
        )
            .into_response(),
        Err(e) => ApiError::Internal {
            message: e.to_string(),
        }
        .into_response(),
    }
}
