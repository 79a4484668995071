//! Defines the core expense record types.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::expense::Category;

/// The unique identifier of an expense record.
pub type ExpenseId = Uuid;

/// A single recorded expense, i.e. an event where money was spent.
///
/// Expenses are created by [crate::ExpenseStore::add] from an
/// [ExpenseDraft], which assigns the `id` and `created_at` fields. Both are
/// immutable for the life of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The amount of money spent. Always positive.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: Category,
    /// A text description of what the expense was for.
    pub description: String,
    /// The date the expense was incurred. Supplied by the user, distinct
    /// from when the record was created.
    pub date: Date,
    /// When the record was created. Metadata only, never used for sorting
    /// or filtering.
    pub created_at: OffsetDateTime,
}

/// The user-supplied fields of an expense, before an `id` and `created_at`
/// have been assigned.
///
/// Field validation (positive amount, non-empty description) is the
/// responsibility of the caller building the draft, not the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    /// The amount of money spent.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: Category,
    /// A text description of what the expense was for.
    pub description: String,
    /// The date the expense was incurred.
    pub date: Date,
}

impl ExpenseDraft {
    /// Create a draft expense.
    pub fn new(amount: f64, category: Category, description: &str, date: Date) -> Self {
        Self {
            amount,
            category,
            description: description.to_owned(),
            date,
        }
    }

    /// Turn the draft into a full [Expense] with a fresh ID and a
    /// `created_at` of now.
    pub(crate) fn into_expense(self) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
