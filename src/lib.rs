//! Ledger API is a small web service for recording and summarising financial
//! transactions.
//!
//! This library provides a JSON REST API over a single SQLite table of
//! transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod database_id;
mod date;
mod db;
mod endpoints;
mod extract;
mod logging;
mod not_found;
mod routing;
mod transaction;

pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use date::is_valid_date;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_SIZE_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    Transaction, TransactionInput, TransactionSummary, create_transaction, get_summary,
    get_transaction, list_transactions,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The date of a transaction was not a real calendar date in the format
    /// `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date in the format YYYY-MM-DD")]
    InvalidDate(String),

    /// The request body could not be parsed as the expected JSON object.
    ///
    /// Callers should pass in the rejection message so the client can see
    /// which field was wrong.
    #[error("could not parse the request body: {0}")]
    InvalidRequestBody(String),

    /// The transaction ID in the request path was not an integer.
    #[error("invalid transaction ID: {0}")]
    InvalidTransactionId(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has been created.
    ///
    /// Internally, this error may occur when a query returns no rows or when
    /// an update or delete affects zero rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidTransactionId(rejection.body_text())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// A short, human readable description of what went wrong.
    pub message: String,
    /// The underlying error, if there is one worth showing the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    fn new(message: &str, error: Option<String>) -> Self {
        Self {
            message: message.to_owned(),
            error,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_json_response("An unexpected error occurred")
    }
}

impl Error {
    /// Convert the error into a JSON response.
    ///
    /// `failure_message` is used as the message for server errors, e.g.
    /// "Error adding transaction". Client errors carry their own message.
    pub(crate) fn into_json_response(self, failure_message: &str) -> Response {
        let (status, body) = match self {
            Error::InvalidDate(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid date format. Please use YYYY-MM-DD.", None),
            ),
            Error::InvalidRequestBody(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid request body", Some(reason)),
            ),
            Error::InvalidTransactionId(reason) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid transaction ID", Some(reason)),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Transaction not found", None),
            ),
            Error::SqlError(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(failure_message, Some(error.to_string())),
            ),
            error @ Error::DatabaseLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(failure_message, Some(error.to_string())),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
