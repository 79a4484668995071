//! The durable storage slots backing the in-memory store.
//!
//! Storage is a directory holding one file per slot: the expense
//! collection as a JSON array under the `expenses` key, and the theme
//! preference as a plain string under the `theme` key. There is no schema
//! migration or versioning; an unreadable slot is treated the same as an
//! absent one.

use std::{fs, io::ErrorKind, path::PathBuf};

use crate::{Error, Theme, expense::Expense};

/// The name of the slot holding the expense collection.
const EXPENSES_KEY: &str = "expenses.json";
/// The name of the slot holding the theme preference.
const THEME_KEY: &str = "theme";

/// Reads and writes the durable mirror of the expense collection.
///
/// The adapter owns only the mirror: it never mutates records on its own,
/// and the store never reads it back after start-up.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_dir: PathBuf,
}

impl JsonStorage {
    /// Create a storage adapter rooted at `data_dir`, creating the
    /// directory if it does not exist.
    ///
    /// # Errors
    /// Returns [Error::StorageWrite] if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let data_dir = data_dir.into();

        fs::create_dir_all(&data_dir)
            .map_err(|error| Error::StorageWrite(error.to_string()))?;

        Ok(Self { data_dir })
    }

    /// Read the expense collection from the `expenses` slot.
    ///
    /// An absent or unparseable slot yields an empty collection: a missing
    /// slot is a fresh install, and a corrupt one is logged and skipped so
    /// the app still starts.
    pub fn load_expenses(&self) -> Vec<Expense> {
        let path = self.data_dir.join(EXPENSES_KEY);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!("could not read {}: {error}", path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(expenses) => expenses,
            Err(error) => {
                tracing::warn!(
                    "could not parse {} as an expense collection, starting empty: {error}",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the `expenses` slot.
    ///
    /// # Errors
    /// Returns [Error::Serialization] if the collection cannot be encoded
    /// as JSON, or [Error::StorageWrite] if the slot cannot be written.
    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), Error> {
        let contents = serde_json::to_string(expenses)
            .map_err(|error| Error::Serialization(error.to_string()))?;

        fs::write(self.data_dir.join(EXPENSES_KEY), contents)
            .map_err(|error| Error::StorageWrite(error.to_string()))
    }

    /// Read the theme preference from the `theme` slot.
    ///
    /// An absent or unrecognized value falls back to [Theme::Light].
    pub fn load_theme(&self) -> Theme {
        match fs::read_to_string(self.data_dir.join(THEME_KEY)) {
            Ok(contents) => contents.trim().parse().unwrap_or_default(),
            Err(_) => Theme::default(),
        }
    }

    /// Overwrite the `theme` slot with the given preference.
    ///
    /// # Errors
    /// Returns [Error::StorageWrite] if the slot cannot be written.
    pub fn save_theme(&self, theme: Theme) -> Result<(), Error> {
        fs::write(self.data_dir.join(THEME_KEY), theme.to_string())
            .map_err(|error| Error::StorageWrite(error.to_string()))
    }
}
