//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error, TransactionType, UserId,
    database_id::{CategoryId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and
/// [insert_transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The user that recorded the transaction.
    pub user_id: UserId,
    /// An optional note describing what the transaction was for.
    pub note: Option<String>,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the money was spent or earned.
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
    /// When the transaction happened.
    pub created_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(
        user_id: UserId,
        amount: f64,
        transaction_type: TransactionType,
        category_id: CategoryId,
        created_at: OffsetDateTime,
    ) -> NewTransaction {
        NewTransaction {
            user_id,
            note: None,
            amount,
            transaction_type,
            category_id,
            created_at,
        }
    }
}

/// A transaction that has not been stored yet.
///
/// # Examples
///
/// ```ignore
/// use time::macros::datetime;
///
/// let new_transaction = Transaction::build(
///         UserId::new_unchecked("3f1c2a9e"),
///         45.99,
///         TransactionType::Expense,
///         1,
///         datetime!(2025-01-15 08:30 UTC),
///     )
///     .note(Some("Coffee beans".to_owned()));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct NewTransaction {
    /// The user recording the transaction.
    pub user_id: UserId,
    /// An optional free-text note.
    pub note: Option<String>,
    /// The amount of money, e.g. the output of [crate::currency::string_to_numeric].
    pub amount: f64,
    /// Whether the money was spent or earned.
    pub transaction_type: TransactionType,
    /// The category of the transaction, e.g. "Food", "Salary".
    pub category_id: CategoryId,
    /// When the transaction happened.
    pub created_at: OffsetDateTime,
}

impl NewTransaction {
    /// Set the note for the transaction.
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a single transaction into the database and return the stored row.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidCategory] if the category ID does not refer to a real category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn insert_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let category_id = new_transaction.category_id;

    let transaction = connection
        .prepare(
            "INSERT INTO transactions (note, amount, transaction_type, category_id, user_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, note, amount, transaction_type, category_id, user_id, created_at",
        )?
        .query_row(
            (
                new_transaction.note,
                new_transaction.amount,
                new_transaction.transaction_type,
                new_transaction.category_id,
                new_transaction.user_id,
                new_transaction.created_at,
            ),
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                },
                _,
            ) => Error::InvalidCategory(category_id),
            error => error.into(),
        })?;

    tracing::debug!(
        "inserted {} transaction {} for user {}",
        transaction.transaction_type,
        transaction.id,
        transaction.user_id
    );

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
#[cfg(test)]
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, note, amount, transaction_type, category_id, user_id, created_at
             FROM transactions WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Create the transaction table in the database.
///
/// The category table must be created first.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                note TEXT,
                amount REAL NOT NULL,
                transaction_type INTEGER NOT NULL CHECK (transaction_type IN (1, 2)),
                category_id INTEGER NOT NULL,
                user_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY(category_id) REFERENCES categories(id) ON UPDATE CASCADE ON DELETE RESTRICT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_user_created_at ON transactions(user_id, created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let note = row.get(1)?;
    let amount = row.get(2)?;
    let transaction_type = row.get(3)?;
    let category_id = row.get(4)?;
    let user_id = row.get(5)?;
    let created_at = row.get(6)?;

    Ok(Transaction {
        id,
        user_id,
        note,
        amount,
        transaction_type,
        category_id,
        created_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================
