//! Categories for grouping transactions, e.g. 'Groceries' or 'Salary'.
//!
//! A category is either owned by a single user or global (shared by all
//! users), and only applies to one [crate::TransactionType].

mod api;
mod db;
mod domain;

pub use api::get_categories_endpoint;
pub use db::{create_category, create_category_table, fetch_categories, seed_global_categories};
pub use domain::{Category, CategoryName, NewCategory};
