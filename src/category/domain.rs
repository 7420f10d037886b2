//! Core category domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, TransactionType, UserId, database_id::CategoryId};

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category that can be assigned to a transaction.
///
/// Serializes to an `{"id": ..., "name": ...}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: CategoryName,
}

/// The data needed to create a category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    /// The display name of the category.
    pub name: CategoryName,
    /// The kind of transaction this category can be used for.
    pub transaction_type: TransactionType,
    /// The user that owns the category, or `None` for a global category that
    /// every user can see.
    pub user_id: Option<UserId>,
}
