//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    expense::{Category, Expense, query},
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    storage::JsonStorage,
    store::ExpenseStore,
    theme::Theme,
};

use super::{
    cards::{breakdown_table, recent_expenses_card, total_card},
    charts::{DashboardChart, charts_script, spending_chart},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The expense store.
    pub store: Arc<Mutex<ExpenseStore>>,
    /// The storage adapter holding the theme slot.
    pub storage: JsonStorage,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            storage: state.storage.clone(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    grand_total: f64,
    expense_count: usize,
    category_totals: [(Category, f64); Category::ALL.len()],
    recent: Vec<Expense>,
}

/// Display a page with an overview of the recorded expenses.
///
/// Totals and the breakdown are computed over the full collection; the
/// expense list filters do not affect this page.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let data = {
        let store = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        let expenses = store.expenses();

        DashboardData {
            grand_total: query::grand_total(expenses),
            expense_count: expenses.len(),
            category_totals: query::category_totals(expenses),
            recent: query::recent(expenses),
        }
    };

    let theme = state.storage.load_theme();
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW, theme);

    if data.expense_count == 0 {
        return Ok(dashboard_no_data_view(nav_bar, theme).into_response());
    }

    Ok(dashboard_view(nav_bar, &data, theme).into_response())
}

/// Renders the dashboard page when no expenses have been recorded.
fn dashboard_no_data_view(nav_bar: NavBar, theme: Theme) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "recording an expense");

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Totals and the category breakdown will show up here once you
                add some expenses. Get started by " (new_expense_link) "."
            }
        }
    );

    base("Dashboard", theme, &[], &content)
}

/// Renders the main dashboard page with the totals card, the spending
/// chart, the breakdown table and the recent expenses.
fn dashboard_view(nav_bar: NavBar, data: &DashboardData, theme: Theme) -> Markup {
    let nav_bar = nav_bar.into_html();
    let chart = DashboardChart {
        id: "spending-chart",
        options: spending_chart(&data.category_totals).to_string(),
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full lg:max-w-5xl lg:mx-auto space-y-4"
            {
                h1 class="text-xl font-bold" { "Dashboard" }

                div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                {
                    div class="space-y-4"
                    {
                        (total_card(data.grand_total, data.expense_count))

                        (recent_expenses_card(&data.recent))
                    }

                    div class="space-y-4"
                    {
                        div class="bg-white rounded-lg shadow p-6 dark:bg-gray-800"
                        {
                            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400"
                            {
                                "Spending by Category"
                            }

                            div
                                id=(chart.id)
                                class="min-h-[380px] rounded"
                            {}
                        }

                        (breakdown_table(&data.category_totals, data.grand_total))
                    }
                }
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&[chart]),
    ];

    base("Dashboard", theme, &scripts, &content)
}
