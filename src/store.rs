//! The in-memory expense store.
//!
//! The store is the single source of truth for the expense collection and
//! the active list filters. Every mutation is applied in memory first and
//! then mirrored to the durable storage slot; a failed mirror write is
//! logged and the in-memory state is kept, so the worst case after a crash
//! is the loss of the most recent mutation.

use crate::{
    expense::{CategoryFilter, DateRange, Expense, ExpenseDraft, ExpenseFilter, ExpenseId},
    storage::JsonStorage,
};

/// Holds the expense collection and the active filters, and mirrors the
/// collection to a [JsonStorage] slot after every mutation.
///
/// The store performs no field validation: callers are expected to have
/// validated amounts and descriptions before building an [ExpenseDraft].
/// Mutations that reference an unknown ID are silent no-ops.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    filter: ExpenseFilter,
    storage: JsonStorage,
}

impl ExpenseStore {
    /// Create a store backed by `storage`, restoring the expense collection
    /// from the durable slot.
    ///
    /// Filters always start at their defaults; they are never persisted.
    pub fn new(storage: JsonStorage) -> Self {
        let expenses = storage.load_expenses();

        Self {
            expenses,
            filter: ExpenseFilter::default(),
            storage,
        }
    }

    /// The full, unfiltered expense collection, newest insertion first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The active list filters.
    pub fn filter(&self) -> ExpenseFilter {
        self.filter
    }

    /// Record a new expense, assigning it a fresh ID and a creation
    /// timestamp of now, and prepend it to the collection.
    pub fn add(&mut self, draft: ExpenseDraft) -> Expense {
        let expense = draft.into_expense();
        self.expenses.insert(0, expense.clone());
        self.mirror();

        expense
    }

    /// Replace the stored record whose ID matches `expense.id`.
    ///
    /// The record keeps its position in the collection. If no record has a
    /// matching ID the collection is left unchanged.
    pub fn update(&mut self, expense: Expense) {
        let Some(existing) = self
            .expenses
            .iter_mut()
            .find(|candidate| candidate.id == expense.id)
        else {
            tracing::debug!("ignoring update for unknown expense {}", expense.id);
            return;
        };

        *existing = expense;
        self.mirror();
    }

    /// Remove the record with the given ID, if present.
    ///
    /// Deleting an ID that is not in the collection is a no-op, so the
    /// operation is idempotent.
    pub fn delete(&mut self, id: ExpenseId) {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);

        if self.expenses.len() != before {
            self.mirror();
        }
    }

    /// Replace the active category filter.
    pub fn set_filter_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Replace the active date-range filter. `None` clears it.
    pub fn set_filter_date_range(&mut self, range: Option<DateRange>) {
        self.filter.date_range = range;
    }

    /// Write the collection to the durable slot.
    ///
    /// Failures are logged as warnings: no in-memory state is lost, and the
    /// next successful mirror writes the full collection again.
    fn mirror(&self) {
        if let Err(error) = self.storage.save_expenses(&self.expenses) {
            tracing::warn!("could not mirror expenses to storage: {error}");
        }
    }
}

#[cfg(test)]
mod store_tests {
    use std::collections::HashSet;

    use tempfile::TempDir;
    use time::macros::date;
    use uuid::Uuid;

    use crate::{
        expense::{Category, CategoryFilter, DateRange, ExpenseDraft},
        storage::JsonStorage,
    };

    use super::ExpenseStore;

    fn get_test_store() -> (TempDir, ExpenseStore) {
        let dir = TempDir::new().expect("could not create temp dir");
        let storage = JsonStorage::new(dir.path()).expect("could not create storage");

        (dir, ExpenseStore::new(storage))
    }

    fn lunch_draft() -> ExpenseDraft {
        ExpenseDraft::new(12.50, Category::Food, "Lunch", date!(2024 - 03 - 01))
    }

    #[test]
    fn add_grows_collection_with_unique_ids() {
        let (_dir, mut store) = get_test_store();
        let count = 10;

        for _ in 0..count {
            store.add(lunch_draft());
        }

        assert_eq!(store.expenses().len(), count);
        let ids: HashSet<_> = store.expenses().iter().map(|expense| expense.id).collect();
        assert_eq!(ids.len(), count, "expected every expense to get a unique ID");
    }

    #[test]
    fn add_prepends_newest_expense() {
        let (_dir, mut store) = get_test_store();
        store.add(ExpenseDraft::new(
            1.0,
            Category::Other,
            "First",
            date!(2024 - 01 - 01),
        ));

        store.add(ExpenseDraft::new(
            2.0,
            Category::Other,
            "Second",
            date!(2024 - 01 - 02),
        ));

        assert_eq!(store.expenses()[0].description, "Second");
        assert_eq!(store.expenses()[1].description, "First");
    }

    #[test]
    fn update_replaces_only_the_matching_record() {
        let (_dir, mut store) = get_test_store();
        let first = store.add(lunch_draft());
        let second = store.add(ExpenseDraft::new(
            30.0,
            Category::Housing,
            "Power",
            date!(2024 - 03 - 02),
        ));

        let mut edited = first.clone();
        edited.amount = 15.0;
        edited.description = "Long lunch".to_owned();
        store.update(edited.clone());

        // The edited record keeps its position and the other is untouched.
        assert_eq!(store.expenses(), &[second, edited]);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let (_dir, mut store) = get_test_store();
        store.add(lunch_draft());
        let before = store.expenses().to_vec();

        let mut stranger = before[0].clone();
        stranger.id = Uuid::new_v4();
        stranger.amount = 999.0;
        store.update(stranger);

        assert_eq!(store.expenses(), before);
    }

    #[test]
    fn update_preserves_id_and_created_at() {
        let (_dir, mut store) = get_test_store();
        let original = store.add(lunch_draft());

        let mut edited = original.clone();
        edited.amount = 20.0;
        store.update(edited);

        let stored = &store.expenses()[0];
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.created_at, original.created_at);
        assert_eq!(stored.amount, 20.0);
    }

    #[test]
    fn delete_is_idempotent() {
        let (_dir, mut store) = get_test_store();
        let expense = store.add(lunch_draft());

        store.delete(expense.id);
        store.delete(expense.id);

        assert!(store.expenses().is_empty());
    }

    #[test]
    fn delete_with_unknown_id_is_a_no_op() {
        let (_dir, mut store) = get_test_store();
        store.add(lunch_draft());

        store.delete(Uuid::new_v4());

        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn mutations_are_mirrored_to_storage() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();
        let mut store = ExpenseStore::new(storage.clone());

        let expense = store.add(lunch_draft());
        assert_eq!(storage.load_expenses(), store.expenses());

        store.delete(expense.id);
        assert!(storage.load_expenses().is_empty());
    }

    #[test]
    fn collection_is_restored_across_stores() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        let mut store = ExpenseStore::new(storage.clone());
        store.add(lunch_draft());
        let saved = store.expenses().to_vec();
        drop(store);

        let reopened = ExpenseStore::new(storage);

        assert_eq!(reopened.expenses(), saved);
    }

    #[test]
    fn filters_are_not_persisted_across_stores() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        let mut store = ExpenseStore::new(storage.clone());
        store.set_filter_category(CategoryFilter::Only(Category::Food));
        store.set_filter_date_range(Some(DateRange::new(Some(date!(2024 - 01 - 01)), None)));
        drop(store);

        let reopened = ExpenseStore::new(storage);

        assert!(!reopened.filter().is_active());
    }

    #[test]
    fn filter_setters_replace_previous_settings() {
        let (_dir, mut store) = get_test_store();

        store.set_filter_category(CategoryFilter::Only(Category::Food));
        store.set_filter_category(CategoryFilter::Only(Category::Housing));
        store.set_filter_date_range(Some(DateRange::new(None, Some(date!(2024 - 06 - 30)))));
        store.set_filter_date_range(None);

        assert_eq!(
            store.filter().category,
            CategoryFilter::Only(Category::Housing)
        );
        assert_eq!(store.filter().date_range, None);
    }
}
