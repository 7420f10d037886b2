//! The classification of a transaction as either an expense or income.

use std::fmt::Display;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether money was spent or earned.
///
/// The discriminants are the codes stored in the `transaction_type` column of
/// the `transactions` and `categories` tables and must not change.
///
/// In forms, query strings and JSON the variants are written as `expense`
/// and `income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was spent.
    #[default]
    Expense = 1,
    /// Money that was earned.
    Income = 2,
}

impl TransactionType {
    /// The integer code used to store the transaction type.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// The lowercase name used in URLs and forms, e.g. "expense".
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl TryFrom<i64> for TransactionType {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TransactionType::Expense),
            2 => Ok(TransactionType::Income),
            other => Err(Error::InvalidTransactionType(other)),
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Expense => write!(f, "Expense"),
            TransactionType::Income => write!(f, "Income"),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_i64()?;

        TransactionType::try_from(code).map_err(|_| FromSqlError::OutOfRange(code))
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{Error, transaction_type::TransactionType};

    #[test]
    fn codes_match_stored_values() {
        assert_eq!(TransactionType::Expense.code(), 1);
        assert_eq!(TransactionType::Income.code(), 2);
    }

    #[test]
    fn try_from_accepts_known_codes() {
        assert_eq!(TransactionType::try_from(1), Ok(TransactionType::Expense));
        assert_eq!(TransactionType::try_from(2), Ok(TransactionType::Income));
    }

    #[test]
    fn try_from_rejects_unknown_codes() {
        for code in [0, 3, -1] {
            assert_eq!(
                TransactionType::try_from(code),
                Err(Error::InvalidTransactionType(code))
            );
        }
    }

    #[test]
    fn deserializes_from_lowercase_name() {
        #[derive(serde::Deserialize)]
        struct Query {
            transaction_type: TransactionType,
        }

        let query: Query = serde_html_form::from_str("transaction_type=income").unwrap();

        assert_eq!(query.transaction_type, TransactionType::Income);
    }

    #[test]
    fn round_trips_through_sqlite_as_integer() {
        let connection = Connection::open_in_memory().unwrap();

        let (code, transaction_type): (i64, TransactionType) = connection
            .query_row(
                "SELECT ?1, ?1",
                (TransactionType::Income,),
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();

        assert_eq!(code, 2);
        assert_eq!(transaction_type, TransactionType::Income);
    }

    #[test]
    fn reading_unknown_code_from_sqlite_fails() {
        let connection = Connection::open_in_memory().unwrap();

        let result: rusqlite::Result<TransactionType> =
            connection.query_row("SELECT 7", [], |row| row.get(0));

        assert!(result.is_err());
    }
}
