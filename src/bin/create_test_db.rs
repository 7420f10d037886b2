use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::OffsetDateTime;

use expense_tracker_rs::{
    CategoryName, NewCategory, Transaction, TransactionType, UserId, create_category,
    initialize_db, insert_transaction,
};

/// A utility for creating a test database for the expense_tracker_rs server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The user to create categories and transactions for.
    #[arg(long, default_value = "test-user")]
    user_id: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let user_id = UserId::new(&args.user_id)?;

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating categories for {user_id}...");
    let coffee = create_category(
        NewCategory {
            name: CategoryName::new("Coffee")?,
            transaction_type: TransactionType::Expense,
            user_id: Some(user_id.clone()),
        },
        &conn,
    )?;
    let tutoring = create_category(
        NewCategory {
            name: CategoryName::new("Tutoring")?,
            transaction_type: TransactionType::Income,
            user_id: Some(user_id.clone()),
        },
        &conn,
    )?;

    println!("Creating sample transactions...");
    let now = OffsetDateTime::now_utc();
    insert_transaction(
        Transaction::build(
            user_id.clone(),
            4.5,
            TransactionType::Expense,
            coffee.id,
            now,
        )
        .note(Some("Flat white".to_owned())),
        &conn,
    )?;
    insert_transaction(
        Transaction::build(user_id, 60.0, TransactionType::Income, tutoring.id, now),
        &conn,
    )?;

    println!("Success!");

    Ok(())
}
