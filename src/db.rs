//! Setting up the application database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    category::{create_category_table, seed_global_categories},
    transaction::create_transaction_table,
};

/// Create the tables for the domain models and add the default global categories.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an error if the tables cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    // Has no effect inside a transaction, so it must be set first.
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;
    let seeded = seed_global_categories(&transaction)?;

    transaction.commit()?;

    if seeded > 0 {
        tracing::info!("added {seeded} global categories to the database");
    }

    Ok(())
}
