//! Defines the endpoint for updating a transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};

use crate::{
    Error,
    app_state::lock_connection,
    database_id::TransactionId,
    extract::{Json, Path},
    transaction::{TransactionInput, TransactionState},
};

const UPDATE_ERROR_MESSAGE: &str = "Error updating transaction";

/// A route handler for replacing every field of a transaction.
///
/// Responds with the supplied fields and the transaction ID. The row is not
/// read back from the database after the update.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(input): Json<TransactionInput>,
) -> Response {
    if let Err(error) = input.validate() {
        tracing::warn!("Rejected update to transaction {transaction_id}: {error}");
        return error.into_response();
    }

    let rows_affected = lock_connection(&state.db_connection)
        .and_then(|connection| update_transaction(transaction_id, &input, &connection));

    match rows_affected {
        Ok(0) => {
            tracing::debug!("Could not update transaction {transaction_id}: no matching row");
            Error::NotFound.into_response()
        }
        Ok(_) => Json(input.into_transaction(transaction_id)).into_response(),
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_json_response(UPDATE_ERROR_MESSAGE)
        }
    }
}

type RowsAffected = usize;

fn update_transaction(
    id: TransactionId,
    transaction: &TransactionInput,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE transactions \
        SET \
            type = ?1, \
            category_id = ?2, \
            amount = ?3, \
            date = ?4, \
            description = ?5 \
        WHERE id = ?6;",
            params![
                transaction.transaction_type,
                transaction.category_id,
                transaction.amount,
                transaction.date,
                transaction.description,
                id,
            ],
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::{body::to_bytes, extract::State, http::StatusCode};

    use crate::{
        extract::{Json, Path},
        transaction::{
            Transaction, TransactionInput, TransactionState, create_transaction,
            edit_endpoint::{edit_transaction_endpoint, update_transaction},
            get_transaction, list_transactions,
            test_utils::{
                drop_transactions_table, get_test_connection, input, parse_error_response,
            },
        },
    };

    #[tokio::test]
    async fn can_update_transaction() {
        let conn = get_test_connection();
        let created = create_transaction(&input("expense", 25.5, "2024-03-10"), &conn)
            .expect("could not create test transaction");
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let new_input = TransactionInput {
            transaction_type: "expense".to_owned(),
            category_id: 2,
            amount: 30.0,
            date: "2024-03-11".to_owned(),
            description: Some("coffee".to_owned()),
        };
        let want_transaction = new_input.clone().into_transaction(created.id);

        let response =
            edit_transaction_endpoint(State(state.clone()), Path(created.id), Json(new_input))
                .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let got_response: Transaction = serde_json::from_slice(&body).unwrap();
        assert_eq!(got_response, want_transaction);
        let got_transaction = get_transaction(
            created.id,
            &state.db_connection.lock().expect("could not acquire lock"),
        )
        .expect("could not get test transaction");
        assert_eq!(got_transaction, want_transaction);
    }

    #[tokio::test]
    async fn update_missing_transaction_is_not_found() {
        let conn = get_test_connection();
        let existing = create_transaction(&input("income", 1.0, "2024-01-01"), &conn).unwrap();
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(existing.id + 1),
            Json(input("expense", 2.0, "2024-01-02")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(list_transactions(&connection), Ok(vec![existing]));
    }

    #[tokio::test]
    async fn invalid_date_does_not_update() {
        let conn = get_test_connection();
        let existing = create_transaction(&input("income", 1.0, "2024-01-01"), &conn).unwrap();
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(existing.id),
            Json(input("income", 5.0, "2024-02-30")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_transaction(existing.id, &connection), Ok(existing));
    }

    #[tokio::test]
    async fn storage_error_is_internal_server_error() {
        let conn = get_test_connection();
        drop_transactions_table(&conn);
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = edit_transaction_endpoint(
            State(state),
            Path(1),
            Json(input("income", 5.0, "2024-02-29")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error = parse_error_response(response).await;
        assert_eq!(error.message, "Error updating transaction");
        assert!(error.error.is_some());
    }

    #[test]
    fn update_reports_rows_affected() {
        let conn = get_test_connection();
        let existing = create_transaction(&input("income", 1.0, "2024-01-01"), &conn).unwrap();

        let rows_affected =
            update_transaction(existing.id, &input("income", 2.0, "2024-01-01"), &conn).unwrap();

        assert_eq!(rows_affected, 1);
    }
}
