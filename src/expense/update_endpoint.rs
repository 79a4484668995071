//! Defines the endpoint for updating an existing expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, endpoints,
    expense::{Expense, ExpenseId, form::ExpenseFormData},
    store::ExpenseStore,
};

/// The state needed to update an expense.
#[derive(Debug, Clone)]
pub struct UpdateExpenseState {
    /// The expense store.
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for UpdateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for updating the expense with the given ID, redirects to
/// the expenses view on success.
///
/// The record keeps its `id` and `created_at`; only the user-editable
/// fields are replaced. An unknown ID is tolerated as a no-op (the record
/// may have been deleted in another tab) and still redirects.
///
/// # Panics
///
/// Panics if the lock for the expense store is already held by the same thread.
pub async fn update_expense_endpoint(
    State(state): State<UpdateExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    Form(form): Form<ExpenseFormData>,
) -> impl IntoResponse {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(error) => return error.into_alert_response(),
    };

    {
        let mut store = state.store.lock().unwrap();

        let existing = store
            .expenses()
            .iter()
            .find(|expense| expense.id == expense_id)
            .cloned();

        if let Some(existing) = existing {
            store.update(Expense {
                id: existing.id,
                amount: draft.amount,
                category: draft.category,
                description: draft.description,
                date: draft.date,
                created_at: existing.created_at,
            });
        }
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
