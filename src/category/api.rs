//! JSON endpoint for listing the categories available to the user.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error, TransactionType, UserId,
    category::{Category, fetch_categories},
};

/// The state needed to list categories.
#[derive(Debug, Clone)]
pub struct CategoriesState {
    /// The database connection for reading categories.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The user the categories are listed for.
    pub user_id: UserId,
}

impl FromRef<AppState> for CategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            user_id: state.user_id.clone(),
        }
    }
}

/// The query parameters for listing categories.
#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    /// Which kind of transaction the categories are for.
    pub transaction_type: TransactionType,
}

/// A route handler that returns the user's categories and the global
/// categories for a transaction type as a JSON array of id/name pairs.
pub async fn get_categories_endpoint(
    State(state): State<CategoriesState>,
    Query(query): Query<CategoriesQuery>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let categories = fetch_categories(&state.user_id, query.transaction_type, &connection)
        .inspect_err(|error| tracing::error!("could not fetch categories: {error}"))?;

    Ok(Json(categories))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use rusqlite::Connection;

    use crate::{
        TransactionType, UserId,
        category::{
            CategoryName, NewCategory,
            api::{CategoriesQuery, CategoriesState},
            create_category, create_category_table, get_categories_endpoint,
        },
    };

    fn get_state(user_id: &str) -> CategoriesState {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).unwrap();

        CategoriesState {
            db_connection: Arc::new(Mutex::new(connection)),
            user_id: UserId::new_unchecked(user_id),
        }
    }

    #[tokio::test]
    async fn returns_categories_as_id_name_pairs() {
        let state = get_state("alice");
        {
            let connection = state.db_connection.lock().unwrap();
            create_category(
                NewCategory {
                    name: CategoryName::new_unchecked("Food"),
                    transaction_type: TransactionType::Expense,
                    user_id: None,
                },
                &connection,
            )
            .unwrap();
            create_category(
                NewCategory {
                    name: CategoryName::new_unchecked("Salary"),
                    transaction_type: TransactionType::Income,
                    user_id: None,
                },
                &connection,
            )
            .unwrap();
        }

        let json = get_categories_endpoint(
            State(state),
            Query(CategoriesQuery {
                transaction_type: TransactionType::Expense,
            }),
        )
        .await
        .expect("Could not get categories");

        let body = serde_json::to_value(&json.0).unwrap();
        assert_eq!(body, serde_json::json!([{ "id": 1, "name": "Food" }]));
    }
}
