//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the transactions
    /// table if it does not already exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

/// Acquire the lock on a shared database connection.
///
/// # Errors
/// Returns [Error::DatabaseLockError] if the lock is poisoned.
pub(crate) fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
