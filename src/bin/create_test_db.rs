use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use ledger_api::{TransactionInput, create_transaction, initialize_db};

/// A utility for creating a test database for the ledger API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let sample_transactions = [
        ("income", 1, 2500.0, "2024-03-01", Some("Salary")),
        ("expense", 2, 1200.0, "2024-03-02", Some("Rent")),
        ("expense", 3, 84.3, "2024-03-05", Some("Groceries")),
        ("expense", 4, 25.5, "2024-03-10", Some("coffee")),
        ("income", 5, 150.0, "2024-03-15", None),
    ];

    for (transaction_type, category_id, amount, date, description) in sample_transactions {
        create_transaction(
            &TransactionInput {
                transaction_type: transaction_type.to_owned(),
                category_id,
                amount,
                date: date.to_owned(),
                description: description.map(str::to_owned),
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
