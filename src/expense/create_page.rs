//! The page for recording a new expense.

use axum::{
    extract::{FromRef, State},
    response::IntoResponse,
};
use maud::html;
use time::OffsetDateTime;

use crate::{
    AppState, endpoints,
    expense::form::{ExpenseFormDefaults, expense_form_fields},
    html::{PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    storage::JsonStorage,
};

/// The state needed to display the new expense page.
#[derive(Debug, Clone)]
pub struct NewExpensePageState {
    /// The storage adapter holding the theme slot.
    pub storage: JsonStorage,
}

impl FromRef<AppState> for NewExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }
}

/// Display the form for recording a new expense.
pub async fn get_new_expense_page(State(state): State<NewExpensePageState>) -> impl IntoResponse {
    let theme = state.storage.load_theme();
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW, theme).into_html();
    let today = OffsetDateTime::now_utc().date();

    let form_fields = expense_form_fields(&ExpenseFormDefaults {
        amount: None,
        category: None,
        description: None,
        date: today,
        autofocus_amount: true,
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
                        "Add New Expense"
                    }

                    form
                        class="space-y-4"
                        hx-post=(endpoints::EXPENSES_API)
                        hx-target-error="#alert-container"
                    {
                        (form_fields)

                        button
                            type="submit"
                            class="w-full px-4 py-2 bg-blue-500 dark:bg-blue-600
                            hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded"
                        {
                            "Add Expense"
                        }
                    }
                }
            }
        }
    };

    base("Add Expense", theme, &[dollar_input_styles()], &content)
}
