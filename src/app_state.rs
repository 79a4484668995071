//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::{storage::JsonStorage, store::ExpenseStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The expense store, shared between request handlers.
    pub store: Arc<Mutex<ExpenseStore>>,

    /// The storage adapter, used directly for the theme preference slot.
    pub storage: JsonStorage,
}

impl AppState {
    /// Create a new [AppState] backed by `storage`.
    ///
    /// The expense collection is restored from the durable slot once, here;
    /// afterwards the store owns the canonical collection and storage only
    /// receives mirror writes.
    pub fn new(storage: JsonStorage) -> Self {
        let store = ExpenseStore::new(storage.clone());

        Self {
            store: Arc::new(Mutex::new(store)),
            storage,
        }
    }
}

#[cfg(test)]
mod app_state_tests {
    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        expense::{Category, ExpenseDraft},
        storage::JsonStorage,
    };

    use super::AppState;

    #[test]
    fn state_restores_collection_from_storage() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();
        let expenses = vec![
            ExpenseDraft::new(4.50, Category::Food, "Coffee", date!(2024 - 05 - 01))
                .into_expense(),
        ];
        storage.save_expenses(&expenses).unwrap();

        let state = AppState::new(storage);

        let store = state.store.lock().unwrap();
        assert_eq!(store.expenses(), expenses);
    }
}
