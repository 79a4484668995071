//! Derived views over the expense collection.
//!
//! These are pure functions: they never mutate the collection and always
//! reflect the state they are given. Totals are computed over the full,
//! unfiltered collection so the dashboard does not change when the list
//! filters do.

use crate::expense::{Category, Expense, ExpenseFilter};

/// The number of expenses shown in the dashboard's recent expenses card.
pub(crate) const RECENT_EXPENSE_COUNT: usize = 3;

/// The expenses that pass the active filters, in collection order.
pub fn filtered(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| filter.category.matches(expense.category))
        .filter(|expense| match filter.date_range {
            Some(range) => range.contains(expense.date),
            None => true,
        })
        .cloned()
        .collect()
}

/// The sum of `amount` per category over the full collection.
///
/// Every category appears exactly once, in [Category::ALL] order, with
/// categories that have no expenses mapping to zero.
pub fn category_totals(expenses: &[Expense]) -> [(Category, f64); Category::ALL.len()] {
    Category::ALL.map(|category| {
        let total = expenses
            .iter()
            .filter(|expense| expense.category == category)
            .map(|expense| expense.amount)
            .sum();

        (category, total)
    })
}

/// The sum of `amount` over the full collection.
pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// The most recently dated expenses, newest first.
///
/// Sorts by the user-supplied `date`, not `created_at`. Ties keep their
/// collection order.
pub fn recent(expenses: &[Expense]) -> Vec<Expense> {
    let mut by_date = expenses.to_vec();
    by_date.sort_by(|a, b| b.date.cmp(&a.date));
    by_date.truncate(RECENT_EXPENSE_COUNT);

    by_date
}
