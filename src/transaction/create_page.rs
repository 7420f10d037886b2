//! Defines the route handler for the page for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, TransactionType, UserId,
    category::{Category, fetch_categories},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles, loading_spinner,
    },
    navigation::NavBar,
    timezone::now_local,
    transaction::form::{TransactionFormDefaults, transaction_form_fields},
};

fn create_transaction_view(
    transaction_type: TransactionType,
    max_date: Date,
    available_categories: &[Category],
) -> Markup {
    let create_transaction_route = endpoints::TRANSACTIONS_API;
    let nav_bar = NavBar::new(transaction_type).into_html();
    let spinner = loading_spinner();
    let fields = transaction_form_fields(
        &TransactionFormDefaults {
            transaction_type,
            date: max_date,
            max_date,
        },
        available_categories,
    );
    let title = format!("New {transaction_type}");

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=(create_transaction_route)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { (title) }

                (fields)

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Save " (transaction_type)
                }
            }
        }
    };

    base(&title, &[dollar_input_styles()], &content)
}

/// The state needed for create new transaction page.
#[derive(Debug, Clone)]
pub struct CreateTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The database connection for accessing categories.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The user whose categories are listed.
    pub user_id: UserId,
}

impl FromRef<AppState> for CreateTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
            user_id: state.user_id.clone(),
        }
    }
}

/// The query parameters for the new transaction page.
#[derive(Debug, Default, Deserialize)]
pub struct NewTransactionQuery {
    /// The kind of transaction to create, defaults to an expense.
    #[serde(default, rename = "type")]
    pub transaction_type: TransactionType,
}

/// Renders the page for creating a transaction.
pub async fn get_create_transaction_page(
    State(state): State<CreateTransactionPageState>,
    Query(query): Query<NewTransactionQuery>,
) -> Result<Response, Error> {
    let available_categories = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        fetch_categories(&state.user_id, query.transaction_type, &connection).inspect_err(
            |error| tracing::error!("Failed to retrieve categories for new transaction page: {error}"),
        )?
    };

    let now = now_local(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone)
    })?;

    Ok(
        create_transaction_view(query.transaction_type, now.date(), &available_categories)
            .into_response(),
    )
}
