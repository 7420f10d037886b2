//! The API endpoints URIs.

/// The root route which redirects to the new transaction page.
pub const ROOT: &str = "/";
/// The page for recording a new expense or income.
pub const NEW_TRANSACTION_VIEW: &str = "/transactions/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route that formats the amount input as the user types.
pub const FORMAT_AMOUNT: &str = "/api/transactions/amount";
/// The route to list the categories available to the user.
pub const CATEGORIES_API: &str = "/api/categories";

/// The new transaction page preset to `transaction_type`.
pub fn new_transaction_view(transaction_type: crate::TransactionType) -> String {
    format!("{NEW_TRANSACTION_VIEW}?type={}", transaction_type.as_str())
}

#[cfg(test)]
mod tests {
    use crate::{TransactionType, endpoints::new_transaction_view};

    #[test]
    fn new_transaction_view_includes_type() {
        assert_eq!(
            new_transaction_view(TransactionType::Income),
            "/transactions/new?type=income"
        );
    }
}
