//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionInput` clients send
//! - Database functions for storing, querying, and summarising transactions
//! - Route handlers for the transaction endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod summary;

pub use core::{
    Transaction, TransactionInput, TransactionState, create_transaction,
    create_transaction_table, get_transaction, list_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::{get_transaction_endpoint, list_transactions_endpoint};
pub use summary::{TransactionSummary, get_summary, get_summary_endpoint};

#[cfg(test)]
pub(crate) use core::{count_transactions, test_utils};
