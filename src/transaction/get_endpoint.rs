//! Defines the endpoints for reading transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    extract::{Json, Path},
    transaction::{
        TransactionState,
        core::{get_transaction, list_transactions},
    },
};

/// A route handler for listing every transaction.
pub async fn list_transactions_endpoint(State(state): State<TransactionState>) -> Response {
    const LIST_ERROR_MESSAGE: &str = "Error fetching transactions";

    let transactions =
        lock_connection(&state.db_connection).and_then(|connection| list_transactions(&connection));

    match transactions {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("could not list transactions: {error}");
            error.into_json_response(LIST_ERROR_MESSAGE)
        }
    }
}

/// A route handler for getting a single transaction by its ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    const GET_ERROR_MESSAGE: &str = "Error fetching transaction";

    let transaction = lock_connection(&state.db_connection)
        .and_then(|connection| get_transaction(transaction_id, &connection));

    match transaction {
        Ok(transaction) => Json(transaction).into_response(),
        Err(Error::NotFound) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("could not get transaction {transaction_id}: {error}");
            error.into_json_response(GET_ERROR_MESSAGE)
        }
    }
}
