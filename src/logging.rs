//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body, in bytes, the middleware will buffer.
///
/// Matches axum's default body limit for extractors.
pub const REQUEST_BODY_SIZE_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Bodies are logged lossily as UTF-8, but the handlers receive the bytes
/// exactly as the client sent them. Request bodies larger than
/// [REQUEST_BODY_SIZE_LIMIT] are rejected with 400 Bad Request.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match to_bytes(body, REQUEST_BODY_SIZE_LIMIT).await {
        Ok(body_bytes) => body_bytes,
        Err(error) => {
            tracing::warn!("Could not read request body: {error}");
            return Error::InvalidRequestBody(error.to_string()).into_response();
        }
    };
    log_request(&parts, &body_text(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(body_bytes) => body_bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &body_text(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

fn body_text(body_bytes: &Bytes) -> String {
    String::from_utf8_lossy(body_bytes).to_string()
}

/// Cut `body` to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a character.
fn truncate(body: &str) -> &str {
    let end = body
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= LOG_BODY_LENGTH_LIMIT)
        .last()
        .unwrap_or(0);

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            truncate(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}
