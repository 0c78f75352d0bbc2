//! The fallback handlers for requests that do not match a route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{ErrorResponse, extract::Json};

/// Respond with 404 Not Found and a JSON error body.
pub async fn get_404_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// Respond with 405 Method Not Allowed and a JSON error body.
///
/// Used when the path exists but not for the request's method.
pub async fn get_405_method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.to_owned(),
            error: None,
        }),
    )
        .into_response()
}
