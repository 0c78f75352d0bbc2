//! Sets up the application's SQLite database.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create the tables for the domain models.
///
/// Existing tables are left as they are, so this is safe to call on a
/// database that has already been initialized.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::db::initialize;

    #[test]
    fn initialize_twice_succeeds() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("first initialization failed");
        initialize(&connection).expect("second initialization failed");
    }

    #[test]
    fn initialize_keeps_existing_rows() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO transactions (type, category_id, amount, date, description)
                 VALUES ('income', 1, 100.0, '2024-03-10', 'salary')",
                (),
            )
            .unwrap();

        initialize(&connection).unwrap();

        let count: i64 = connection
            .query_row("SELECT COUNT(id) FROM transactions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
