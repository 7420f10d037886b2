//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error, TransactionType, UserId,
    category::{Category, CategoryName, NewCategory},
};

/// The categories every user can see, grouped by transaction type.
const GLOBAL_CATEGORIES: [(TransactionType, &[&str]); 2] = [
    (
        TransactionType::Expense,
        &[
            "Food",
            "Transport",
            "Housing",
            "Utilities",
            "Entertainment",
            "Health",
            "Other",
        ],
    ),
    (
        TransactionType::Income,
        &["Salary", "Business", "Investments", "Gifts", "Other"],
    ),
];

/// Create a category and return it with its generated ID.
///
/// Pass `None` as the user ID to create a global category.
pub fn create_category(category: NewCategory, connection: &Connection) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO categories (name, transaction_type, user_id) VALUES (?1, ?2, ?3);",
        (
            category.name.as_ref(),
            category.transaction_type,
            category.user_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name: category.name,
    })
}

/// Retrieve the categories of `transaction_type` that `user_id` can use.
///
/// These are the categories owned by the user plus the global categories,
/// ordered by ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn fetch_categories(
    user_id: &UserId,
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<Vec<Category>, Error> {
    connection
        .prepare(
            "SELECT id, name FROM categories
             WHERE transaction_type = :transaction_type
               AND (user_id = :user_id OR user_id IS NULL)
             ORDER BY id ASC;",
        )?
        .query_map(
            rusqlite::named_params! {
                ":transaction_type": transaction_type,
                ":user_id": user_id,
            },
            map_row,
        )?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Insert the default global categories if there are no categories yet.
///
/// Returns the number of categories that were inserted.
pub fn seed_global_categories(connection: &Connection) -> Result<usize, rusqlite::Error> {
    let category_count: i64 =
        connection.query_row("SELECT COUNT(id) FROM categories;", [], |row| row.get(0))?;

    if category_count > 0 {
        return Ok(0);
    }

    let mut statement = connection.prepare(
        "INSERT INTO categories (name, transaction_type, user_id) VALUES (?1, ?2, NULL);",
    )?;
    let mut inserted = 0;

    for (transaction_type, names) in GLOBAL_CATEGORIES {
        for name in names {
            inserted += statement.execute((name, transaction_type))?;
        }
    }

    Ok(inserted)
}

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            transaction_type INTEGER NOT NULL CHECK (transaction_type IN (1, 2)),
            user_id TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_categories_type_user ON categories(transaction_type, user_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category { id, name })
}
