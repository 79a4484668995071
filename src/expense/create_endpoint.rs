//! Defines the endpoint for recording a new expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{AppState, endpoints, expense::form::ExpenseFormData, store::ExpenseStore};

/// The state needed to record an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The expense store.
    pub store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for recording a new expense, redirects to the expenses
/// view on success.
///
/// Invalid form input is rejected here with an error alert; the store never
/// sees it.
///
/// # Panics
///
/// Panics if the lock for the expense store is already held by the same thread.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseFormData>,
) -> impl IntoResponse {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(error) => return error.into_alert_response(),
    };

    state.store.lock().unwrap().add(draft);

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
