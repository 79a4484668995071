//! Defines the endpoint for deleting an expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse},
};

use crate::{AppState, expense::ExpenseId, store::ExpenseStore};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The expense store.
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting an expense.
///
/// Deleting is idempotent: an unknown ID is a no-op and still succeeds, so
/// a double-click or a stale page cannot produce an error. The empty body
/// lets htmx remove the expense's table row.
///
/// # Panics
///
/// Panics if the lock for the expense store is already held by the same thread.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> impl IntoResponse {
    state.store.lock().unwrap().delete(expense_id);

    // The status code has to be 200 OK or HTMX will not delete the table row.
    Html(String::new()).into_response()
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use tempfile::TempDir;
    use time::macros::date;
    use uuid::Uuid;

    use crate::{
        app_state::AppState,
        expense::{Category, ExpenseDraft},
        storage::JsonStorage,
    };

    use super::{DeleteExpenseState, delete_expense_endpoint};

    fn get_test_state() -> (TempDir, DeleteExpenseState) {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();
        let app_state = AppState::new(storage);

        (
            dir,
            DeleteExpenseState {
                store: app_state.store,
            },
        )
    }

    #[tokio::test]
    async fn deletes_expense() {
        let (_dir, state) = get_test_state();
        let expense = state.store.lock().unwrap().add(ExpenseDraft::new(
            12.50,
            Category::Food,
            "Lunch",
            date!(2024 - 03 - 01),
        ));

        let response = delete_expense_endpoint(State(state.clone()), Path(expense.id))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.store.lock().unwrap().expenses().is_empty());
    }

    #[tokio::test]
    async fn deleting_twice_is_idempotent() {
        let (_dir, state) = get_test_state();
        let expense = state.store.lock().unwrap().add(ExpenseDraft::new(
            12.50,
            Category::Food,
            "Lunch",
            date!(2024 - 03 - 01),
        ));

        let first = delete_expense_endpoint(State(state.clone()), Path(expense.id))
            .await
            .into_response();
        let second = delete_expense_endpoint(State(state.clone()), Path(expense.id))
            .await
            .into_response();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_id_still_succeeds() {
        let (_dir, state) = get_test_state();

        let response = delete_expense_endpoint(State(state), Path(Uuid::new_v4()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
