//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - Database functions for storing transactions
//! - View handlers for recording a new expense or income

mod amount_endpoint;
mod core;
mod create_endpoint;
mod create_page;
mod form;

pub use amount_endpoint::format_amount_endpoint;
pub use core::{NewTransaction, Transaction, create_transaction_table, insert_transaction};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;

#[cfg(test)]
pub use core::get_transaction;
