//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    app_state::lock_connection,
    extract::Json,
    transaction::{TransactionInput, TransactionState, core::create_transaction},
};

const CREATE_ERROR_MESSAGE: &str = "Error adding transaction";

/// A route handler for creating a new transaction, responds with the stored
/// transaction and 201 Created on success.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(input): Json<TransactionInput>,
) -> Response {
    if let Err(error) = input.validate() {
        tracing::warn!("Rejected new transaction: {error}");
        return error.into_response();
    }

    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_json_response(CREATE_ERROR_MESSAGE),
    };

    match create_transaction(&input, &connection) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_json_response(CREATE_ERROR_MESSAGE)
        }
    }
}
