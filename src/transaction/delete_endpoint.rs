//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    Error, app_state::lock_connection, database_id::TransactionId, extract::Path,
    transaction::TransactionState,
};

/// A route handler for deleting a transaction, responds with 204 No Content on success.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let rows_affected = lock_connection(&state.db_connection)
        .and_then(|connection| delete_transaction(transaction_id, &connection));

    match rows_affected {
        Ok(0) => Error::NotFound.into_response(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_json_response("Error deleting transaction")
        }
    }
}

type RowsAffected = usize;

fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(|err| err.into())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};

    use crate::{
        Error,
        extract::Path,
        transaction::{
            TransactionState, create_transaction,
            delete_endpoint::{delete_transaction, delete_transaction_endpoint},
            get_transaction,
            test_utils::{
                drop_transactions_table, get_test_connection, input, parse_error_response,
            },
        },
    };

    #[test]
    fn test_deletes_transaction() {
        let connection = get_test_connection();
        let transaction =
            create_transaction(&input("expense", 1.23, "2024-10-26"), &connection).unwrap();

        let rows_affected = delete_transaction(transaction.id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(
            get_transaction(transaction.id, &connection),
            Err(Error::NotFound)
        )
    }

    #[tokio::test]
    async fn endpoint_responds_no_content() {
        let connection = get_test_connection();
        let transaction =
            create_transaction(&input("expense", 1.23, "2024-10-26"), &connection).unwrap();
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = delete_transaction_endpoint(State(state), Path(transaction.id)).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn endpoint_responds_not_found_for_missing_transaction() {
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(get_test_connection())),
        };

        let response = delete_transaction_endpoint(State(state), Path(99)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_error_is_internal_server_error() {
        let connection = get_test_connection();
        drop_transactions_table(&connection);
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = delete_transaction_endpoint(State(state), Path(1)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error = parse_error_response(response).await;
        assert_eq!(error.message, "Error deleting transaction");
        assert!(error.error.is_some());
    }
}
