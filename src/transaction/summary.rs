//! Totals of transaction amounts grouped by transaction type.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::lock_connection,
    extract::Json,
    transaction::TransactionState,
};

/// The sum of the amounts of all transactions of one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// The transaction type the total was calculated for, e.g. "income".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The sum of the amounts of the transactions with this type.
    pub total: f64,
}

/// Sum the transaction amounts for each transaction type.
///
/// Types with no transactions do not appear in the result.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_summary(connection: &Connection) -> Result<Vec<TransactionSummary>, Error> {
    connection
        .prepare("SELECT type, SUM(amount) AS total FROM transactions GROUP BY type")?
        .query_map([], |row| {
            Ok(TransactionSummary {
                transaction_type: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_summary| maybe_summary.map_err(Error::from))
        .collect()
}

/// A route handler for the per-type totals of all transactions.
pub async fn get_summary_endpoint(State(state): State<TransactionState>) -> Response {
    let summary =
        lock_connection(&state.db_connection).and_then(|connection| get_summary(&connection));

    match summary {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => {
            tracing::error!("could not get transaction summary: {error}");
            error.into_json_response("Error fetching summary")
        }
    }
}
