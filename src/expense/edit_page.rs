//! The page for editing an existing expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error, endpoints,
    expense::{
        ExpenseId,
        form::{ExpenseFormDefaults, expense_form_fields},
    },
    html::{PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    storage::JsonStorage,
    store::ExpenseStore,
};

/// The state needed to display the edit expense page.
#[derive(Debug, Clone)]
pub struct EditExpensePageState {
    /// The expense store.
    pub store: Arc<Mutex<ExpenseStore>>,
    /// The storage adapter holding the theme slot.
    pub storage: JsonStorage,
}

impl FromRef<AppState> for EditExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            storage: state.storage.clone(),
        }
    }
}

/// Display the form for editing the expense with the given ID.
///
/// Unlike update and delete, which silently tolerate unknown IDs, rendering
/// the edit page is a read: an unknown ID gets the 404 page.
pub async fn get_edit_expense_page(
    State(state): State<EditExpensePageState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let expense = {
        let store = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        store
            .expenses()
            .iter()
            .find(|expense| expense.id == expense_id)
            .cloned()
            .ok_or(Error::NotFound)?
    };

    let theme = state.storage.load_theme();
    let nav_bar = NavBar::new(endpoints::EDIT_EXPENSE_VIEW, theme).into_html();
    let update_url = endpoints::format_endpoint(endpoints::PUT_EXPENSE, expense.id);

    let form_fields = expense_form_fields(&ExpenseFormDefaults {
        amount: Some(expense.amount),
        category: Some(expense.category),
        description: Some(&expense.description),
        date: expense.date,
        autofocus_amount: false,
    });

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md bg-white rounded-lg shadow dark:border dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight text-gray-900 md:text-2xl dark:text-white"
                    {
                        "Edit Expense"
                    }

                    form
                        class="space-y-4"
                        hx-put=(update_url)
                        hx-target-error="#alert-container"
                    {
                        (form_fields)

                        div class="flex gap-3"
                        {
                            a
                                href=(endpoints::EXPENSES_VIEW)
                                class="w-full px-4 py-2 text-center text-gray-900 bg-white
                                rounded border border-gray-200 hover:bg-gray-100
                                dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600
                                dark:hover:bg-gray-700"
                            {
                                "Cancel"
                            }

                            button
                                type="submit"
                                class="w-full px-4 py-2 bg-blue-500 dark:bg-blue-600
                                hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded"
                            {
                                "Update"
                            }
                        }
                    }
                }
            }
        }
    };

    Ok(base("Edit Expense", theme, &[dollar_input_styles()], &content).into_response())
}
