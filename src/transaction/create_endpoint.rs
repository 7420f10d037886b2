//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, TransactionType, UserId,
    alert::Alert,
    currency::string_to_numeric,
    database_id::CategoryId,
    html::format_currency,
    internal_server_error::get_internal_server_error_redirect,
    timezone::now_local,
    transaction::{Transaction, core::insert_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The user the transaction is recorded for.
    pub user_id: UserId,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
            user_id: state.user_id.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Whether money was spent or earned.
    pub transaction_type: TransactionType,
    /// The amount as entered by the user, e.g. "1,234.56".
    pub amount: String,
    /// The category the transaction belongs to.
    pub category_id: CategoryId,
    /// The date when the transaction ocurred.
    pub date: Date,
    /// An optional note about the transaction.
    #[serde(default)]
    pub note: Option<String>,
}

/// A route handler for creating a new transaction, responds with an alert
/// describing the result.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let amount = string_to_numeric(&form.amount);

    if !amount.is_finite() {
        tracing::error!("could not parse the amount {:?}", form.amount);
        return Error::InvalidAmount(form.amount).into_alert_response();
    }

    let Some(now) = now_local(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    if form.date > now.date() {
        tracing::error!(
            "Tried to perform an operation with a future date (e.g., create a transaction)"
        );

        return Error::FutureDate(form.date).into_alert_response();
    }

    let created_at = form.date.with_time(now.time()).assume_offset(now.offset());
    let note = form
        .note
        .map(|note| note.trim().to_owned())
        .filter(|note| !note.is_empty());

    let new_transaction = Transaction::build(
        state.user_id,
        amount,
        form.transaction_type,
        form.category_id,
        created_at,
    )
    .note(note);

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return get_internal_server_error_redirect();
        }
    };

    match insert_transaction(new_transaction, &connection) {
        Ok(transaction) => {
            let message = format!("{} saved", transaction.transaction_type);
            let details = format!("Recorded {}.", format_currency(transaction.amount));

            Alert::success(&message, &details).render(StatusCode::CREATED)
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");

            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::Response};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::{Duration, OffsetDateTime};

    use crate::{
        TransactionType, UserId,
        db::initialize,
        test_utils::{assert_valid_html, parse_html_fragment},
        transaction::{
            create_endpoint::{CreateTransactionState, TransactionForm},
            create_transaction_endpoint, get_transaction,
        },
    };

    fn get_state() -> CreateTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
            user_id: UserId::new_unchecked("alice"),
        }
    }

    fn form(amount: &str) -> TransactionForm {
        TransactionForm {
            transaction_type: TransactionType::Expense,
            amount: amount.to_owned(),
            category_id: 1,
            date: OffsetDateTime::now_utc().date(),
            note: Some("Lunch".to_owned()),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_state();

        let response = create_transaction_endpoint(State(state.clone()), Form(form("1,234.567"))).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let alert_text = alert_text(response).await;
        assert!(
            alert_text.contains("$1,234.57"),
            "want alert to mention the amount, got {alert_text:?}"
        );

        // The first transaction will have ID 1
        let connection = state.db_connection.lock().unwrap();
        let transaction = get_transaction(1, &connection).unwrap();
        assert_eq!(transaction.amount, 1234.57);
        assert_eq!(transaction.note.as_deref(), Some("Lunch"));
        assert_eq!(transaction.user_id, UserId::new_unchecked("alice"));
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.created_at.date(), OffsetDateTime::now_utc().date());
    }

    #[tokio::test]
    async fn blank_note_is_stored_as_none() {
        let state = get_state();
        let form = TransactionForm {
            note: Some("   ".to_owned()),
            ..form("5")
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let connection = state.db_connection.lock().unwrap();
        let transaction = get_transaction(1, &connection).unwrap();
        assert_eq!(transaction.note, None);
    }

    #[tokio::test]
    async fn rejects_amount_that_is_not_a_number() {
        let state = get_state();

        let response = create_transaction_endpoint(State(state.clone()), Form(form("abc"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_no_transactions(&state);
    }

    #[tokio::test]
    async fn rejects_future_date() {
        let state = get_state();
        let form = TransactionForm {
            date: OffsetDateTime::now_utc().date() + Duration::days(2),
            ..form("12.50")
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_no_transactions(&state);
    }

    #[tokio::test]
    async fn rejects_invalid_category() {
        let state = get_state();
        let form = TransactionForm {
            category_id: 9999,
            ..form("12.50")
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_no_transactions(&state);
    }

    async fn alert_text(response: Response) -> String {
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        html.root_element().text().collect()
    }

    #[track_caller]
    fn assert_no_transactions(state: &CreateTransactionState) {
        let connection = state.db_connection.lock().unwrap();
        let count: i64 = connection
            .query_row("SELECT COUNT(id) FROM transactions", [], |row| row.get(0))
            .unwrap();

        assert_eq!(count, 0, "want no transactions, got {count}");
    }
}
