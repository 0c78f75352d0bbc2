//! Defines the core data models and database queries for transactions.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    database_id::{DatabaseId, TransactionId},
    date::is_valid_date,
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The kind of transaction, e.g. "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The ID of the category the transaction belongs to.
    pub category_id: DatabaseId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened, formatted as `YYYY-MM-DD`.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

/// The fields a client supplies to create or replace a transaction.
///
/// Updates replace every field, so the same shape is used for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// The kind of transaction, e.g. "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The ID of the category the transaction belongs to.
    ///
    /// This is not checked against any category table.
    pub category_id: DatabaseId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened, must be a real date formatted as `YYYY-MM-DD`.
    pub date: String,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionInput {
    /// Check the input before it is written to the database.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] if `date` is not a real date formatted as `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), Error> {
        if is_valid_date(&self.date) {
            Ok(())
        } else {
            Err(Error::InvalidDate(self.date.clone()))
        }
    }

    /// Attach `id` to the input to get a full transaction.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            category_id: self.category_id,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

/// The state needed by the transaction route handlers.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The database assigns the transaction ID. The date is not validated here,
/// callers should use [TransactionInput::validate] first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn create_transaction(
    input: &TransactionInput,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, category_id, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, category_id, amount, date, description",
        )?
        .query_row(
            (
                &input.transaction_type,
                input.category_id,
                input.amount,
                &input.date,
                &input.description,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category_id, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the database.
///
/// Rows are returned in the database's default order.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, type, category_id, amount, date, description FROM transactions")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category_id INTEGER NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let category_id = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        category_id,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
