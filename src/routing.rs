//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, TransactionType,
    category::get_categories_endpoint,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, format_amount_endpoint, get_create_transaction_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_create_transaction_page),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::FORMAT_AMOUNT, post(format_amount_endpoint))
        .route(endpoints::CATEGORIES_API, get(get_categories_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the page for recording an expense.
async fn get_index_page() -> Redirect {
    Redirect::to(&endpoints::new_transaction_view(TransactionType::Expense))
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde::Serialize;
    use serde_json::Value;
    use time::OffsetDateTime;

    use crate::{AppState, UserId, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let state = AppState::new(
            Connection::open_in_memory().unwrap(),
            UserId::new_unchecked("alice"),
            "Etc/UTC",
        )
        .unwrap();

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[derive(Serialize)]
    struct TransactionForm<'a> {
        transaction_type: &'a str,
        amount: &'a str,
        category_id: i64,
        date: String,
        note: &'a str,
    }

    #[tokio::test]
    async fn new_transaction_page_renders() {
        let server = get_test_server();

        let response = server
            .get(endpoints::NEW_TRANSACTION_VIEW)
            .add_query_param("type", "income")
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("New Income"));
    }

    #[tokio::test]
    async fn format_amount_returns_formatted_input() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FORMAT_AMOUNT)
            .form(&[("amount", "1234567.891")])
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("value=\"1,234,567.89\""));
    }

    #[tokio::test]
    async fn create_transaction_returns_created() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&TransactionForm {
                transaction_type: "expense",
                amount: "42.50",
                category_id: 1,
                date: OffsetDateTime::now_utc().date().to_string(),
                note: "",
            })
            .await;

        response.assert_status(StatusCode::CREATED);
        assert!(response.text().contains("$42.50"));
    }

    #[tokio::test]
    async fn categories_api_returns_json() {
        let server = get_test_server();

        let response = server
            .get(endpoints::CATEGORIES_API)
            .add_query_param("transaction_type", "income")
            .await;

        response.assert_status_ok();
        let categories = response.json::<Vec<Value>>();
        let names: Vec<&str> = categories
            .iter()
            .filter_map(|category| category["name"].as_str())
            .collect();
        assert_eq!(names, ["Salary", "Business", "Investments", "Gifts", "Other"]);
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").expect_failure().await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
