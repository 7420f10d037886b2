//! The identifier of the user that owns transactions and categories.

use std::fmt::Display;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A newtype wrapper for user IDs.
///
/// User IDs are opaque text (e.g., a UUID issued by an identity provider).
/// Wrapping them stops user IDs being mixed up with other strings such as
/// category names or notes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID.
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyUserId] if `id` is empty or only whitespace.
    pub fn new(id: &str) -> Result<Self, Error> {
        let id = id.trim();

        if id.is_empty() {
            Err(Error::EmptyUserId)
        } else {
            Ok(Self(id.to_owned()))
        }
    }

    /// Create a user ID without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ToSql for UserId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for UserId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, user::UserId};

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(UserId::new(""), Err(Error::EmptyUserId));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        assert_eq!(UserId::new(" \t\n"), Err(Error::EmptyUserId));
    }

    #[test]
    fn new_trims_whitespace() {
        let user_id = UserId::new("  3f1c2a9e-user  ").unwrap();

        assert_eq!(user_id.as_ref(), "3f1c2a9e-user");
    }
}
