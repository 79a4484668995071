//! Card components for the dashboard.

use maud::{Markup, html};

use crate::{
    expense::{Category, Expense},
    html::{CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

const CARD_STYLE: &str = "bg-white rounded-lg shadow p-6 dark:bg-gray-800";

/// The headline card with the grand total and the number of recorded
/// expenses.
pub(super) fn total_card(grand_total: f64, expense_count: usize) -> Markup {
    let count_label = if expense_count == 1 {
        "1 expense total".to_owned()
    } else {
        format!("{expense_count} expenses total")
    };

    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400"
            {
                "Total Expenses"
            }

            p class="text-2xl font-bold" { (format_currency(grand_total)) }

            p class="text-xs text-gray-500 dark:text-gray-400" { (count_label) }
        }
    }
}

/// The breakdown table listing every category with its total and share of
/// spending.
///
/// `category_totals` covers the full fixed category set, so the table
/// always has nine rows and the totals column sums to the grand total.
pub(super) fn breakdown_table(category_totals: &[(Category, f64)], grand_total: f64) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400 mb-4"
            {
                "Totals by Category"
            }

            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-3 text-right" { "Total" }
                        th scope="col" class="px-6 py-3 text-right" { "Share" }
                    }
                }

                tbody
                {
                    @for (category, total) in category_totals {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE)
                            {
                                span
                                    class=(CATEGORY_BADGE_STYLE)
                                    style={ "background-color: " (category.color()) }
                                {
                                    (category.label())
                                }
                            }

                            td class="px-6 py-4 text-right" { (format_currency(*total)) }

                            td class="px-6 py-4 text-right" { (format_share(*total, grand_total)) }
                        }
                    }
                }
            }
        }
    }
}

/// The recent expenses card: the three most recently dated expenses.
pub(super) fn recent_expenses_card(recent: &[Expense]) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400 mb-3"
            {
                "Recent Expenses"
            }

            div class="space-y-3"
            {
                @for expense in recent {
                    div class="flex items-center justify-between rounded-lg border
                        border-gray-200 dark:border-gray-700 p-3 text-sm"
                    {
                        div
                        {
                            p class="font-medium text-gray-900 dark:text-white"
                            {
                                (expense.description)
                            }

                            p class="text-xs text-gray-500 dark:text-gray-400"
                            {
                                (expense.category.label()) " · " (expense.date)
                            }
                        }

                        span class="font-medium" { "-" (format_currency(expense.amount)) }
                    }
                }
            }
        }
    }
}

fn format_share(total: f64, grand_total: f64) -> String {
    if grand_total <= 0.0 {
        return "0%".to_owned();
    }

    format!("{:.0}%", total / grand_total * 100.0)
}
