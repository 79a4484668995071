//! The filterable expenses list page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error, endpoints,
    expense::{
        Category, CategoryFilter, DateRange, Expense, ExpenseFilter, form::parse_form_date, query,
    },
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    storage::JsonStorage,
    store::ExpenseStore,
    theme::Theme,
};

/// The max number of graphemes to display in the expense table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The state needed to display the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The expense store.
    pub store: Arc<Mutex<ExpenseStore>>,
    /// The storage adapter holding the theme slot.
    pub storage: JsonStorage,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            storage: state.storage.clone(),
        }
    }
}

/// The filter controls submitted by the expenses page.
///
/// The filter form always submits every field, so the presence of
/// `category` marks a submission; a bare page load leaves the store's
/// filters untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesQuery {
    /// The category selector: `all` or a category name.
    pub category: Option<String>,
    /// The start of the date range, inclusive. Empty means unbounded.
    pub from: Option<String>,
    /// The end of the date range, inclusive. Empty means unbounded.
    pub to: Option<String>,
}

/// Display the (filterable) list of expenses.
///
/// Submitting the filter form dispatches the filter setters on the store;
/// the filters then stay active until changed or cleared, but are never
/// persisted across restarts.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Response, Error> {
    let (expenses, filter) = {
        let mut store = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        apply_filter_query(&mut store, &query);

        (query::filtered(store.expenses(), &store.filter()), store.filter())
    };

    let theme = state.storage.load_theme();
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW, theme);

    Ok(expenses_view(nav_bar, &expenses, &filter, theme).into_response())
}

/// Dispatch the filter setters for a submitted filter form.
///
/// Values that fail to parse (a hand-edited URL) are skipped with a log
/// line rather than surfaced; the select and date inputs cannot produce
/// them.
fn apply_filter_query(store: &mut ExpenseStore, query: &ExpensesQuery) {
    let Some(category) = query.category.as_deref() else {
        return;
    };

    match category.parse::<CategoryFilter>() {
        Ok(filter) => store.set_filter_category(filter),
        Err(error) => tracing::debug!("ignoring category filter: {error}"),
    }

    let from = parse_date_param(query.from.as_deref());
    let to = parse_date_param(query.to.as_deref());

    if from.is_none() && to.is_none() {
        store.set_filter_date_range(None);
    } else {
        store.set_filter_date_range(Some(DateRange::new(from, to)));
    }
}

fn parse_date_param(value: Option<&str>) -> Option<time::Date> {
    let value = value?.trim();

    if value.is_empty() {
        return None;
    }

    match parse_form_date(value) {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::debug!("ignoring date filter bound: {error}");
            None
        }
    }
}

fn expenses_view(
    nav_bar: NavBar,
    expenses: &[Expense],
    filter: &ExpenseFilter,
    theme: Theme,
) -> Markup {
    let nav_bar = nav_bar.into_html();
    let count_label = if expenses.len() == 1 {
        "1 expense".to_owned()
    } else {
        format!("{} expenses", expenses.len())
    };
    let has_active_filters = filter.is_active();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    div
                    {
                        h1 class="text-xl font-bold" { "Expenses" }

                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            (count_label)
                            @if has_active_filters { " (filtered)" }
                        }
                    }

                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                    {
                        "Add Expense"
                    }
                }

                (filter_controls(filter, has_active_filters))

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    @if expenses.is_empty() {
                        (empty_state_view(has_active_filters))
                    } @else {
                        (expenses_table(expenses))
                    }
                }
            }
        }
    };

    base("Expenses", theme, &[], &content)
}

fn filter_controls(filter: &ExpenseFilter, has_active_filters: bool) -> Markup {
    let from_value = filter
        .date_range
        .and_then(|range| range.from)
        .map(|date| date.to_string());
    let to_value = filter
        .date_range
        .and_then(|range| range.to)
        .map(|date| date.to_string());

    html! {
        form
            method="get"
            action=(endpoints::EXPENSES_VIEW)
            class="flex flex-wrap items-end gap-3 bg-gray-50 dark:bg-gray-800 p-4 rounded-lg"
        {
            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @if filter.category == CategoryFilter::All {
                        option value="all" selected { "All Categories" }
                    } @else {
                        option value="all" { "All Categories" }
                    }

                    @for category in Category::ALL {
                        @if filter.category == CategoryFilter::Only(category) {
                            option value=(category) selected { (category.label()) }
                        } @else {
                            option value=(category) { (category.label()) }
                        }
                    }
                }
            }

            div
            {
                label for="from" class=(FORM_LABEL_STYLE) { "From" }

                input
                    name="from"
                    id="from"
                    type="date"
                    value=[from_value.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="to" class=(FORM_LABEL_STYLE) { "To" }

                input
                    name="to"
                    id="to"
                    type="date"
                    value=[to_value.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button
                type="submit"
                class="px-4 py-2 bg-blue-500 dark:bg-blue-600 hover:bg-blue-600
                hover:dark:bg-blue-700 text-white rounded"
            {
                "Apply Filters"
            }

            @if has_active_filters {
                a
                    href={ (endpoints::EXPENSES_VIEW) "?category=all&from=&to=" }
                    class=(LINK_STYLE)
                {
                    "Clear Filters"
                }
            }
        }
    }
}

fn expenses_table(expenses: &[Expense]) -> Markup {
    html! {
        table class="w-full my-2 text-sm text-left rtl:text-right
            text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class="px-6 py-3 text-right" { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for expense in expenses {
                    (expense_row(expense))
                }
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let edit_url = endpoints::format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id);
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class="px-6 py-4 text-right font-medium text-gray-900 dark:text-white"
            {
                (format_currency(expense.amount))
            }

            td class=(TABLE_CELL_STYLE) { (expense.date) }

            td class=(TABLE_CELL_STYLE) title=(expense.description)
            {
                (truncate_description(&expense.description))
            }

            td class=(TABLE_CELL_STYLE)
            {
                span
                    class=(CATEGORY_BADGE_STYLE)
                    style={ "background-color: " (expense.category.color()) }
                {
                    (expense.category.label())
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-3"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-confirm="Delete this expense?"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn empty_state_view(has_active_filters: bool) -> Markup {
    let message = if has_active_filters {
        "Try changing your filters to see more expenses."
    } else {
        "Add your first expense to get started."
    };

    html! {
        div class="flex flex-col items-center justify-center py-12 text-center"
        {
            h2 class="text-lg font-medium mb-1" { "No expenses found" }

            p class="text-gray-500 dark:text-gray-400 mb-4" { (message) }

            @if has_active_filters {
                a
                    href={ (endpoints::EXPENSES_VIEW) "?category=all&from=&to=" }
                    class=(LINK_STYLE)
                {
                    "Clear Filters"
                }
            } @else {
                a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                {
                    "Add Your First Expense"
                }
            }
        }
    }
}

/// Truncate `description` to [MAX_DESCRIPTION_GRAPHEMES] graphemes,
/// appending an ellipsis when anything was cut.
fn truncate_description(description: &str) -> String {
    let graphemes: Vec<&str> = description.graphemes(true).collect();

    if graphemes.len() <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        format!("{}…", graphemes[..MAX_DESCRIPTION_GRAPHEMES].concat())
    }
}
