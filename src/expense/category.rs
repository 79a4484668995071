//! The fixed set of expense categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category an expense belongs to.
///
/// The set of categories is fixed. Expenses that do not fit any of the
/// named categories should use [Category::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries, restaurants, takeaways.
    Food,
    /// Fuel, public transport, vehicle maintenance.
    Transportation,
    /// Rent, mortgage payments, home maintenance.
    Housing,
    /// Movies, games, events, subscriptions.
    Entertainment,
    /// Power, water, internet, phone.
    Utilities,
    /// Doctor visits, medication, insurance.
    Healthcare,
    /// Tuition, courses, books.
    Education,
    /// Clothing, grooming, hobbies.
    Personal,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Education,
        Category::Personal,
        Category::Other,
    ];

    /// The human readable name of the category, e.g. "Food".
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Personal => "Personal",
            Category::Other => "Other",
        }
    }

    /// The lowercase form used in URLs, form values and the JSON mirror.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Housing => "housing",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }

    /// The accent colour used for the category badge and the dashboard pie
    /// chart.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#f97316",
            Category::Transportation => "#3b82f6",
            Category::Housing => "#8b5cf6",
            Category::Entertainment => "#ec4899",
            Category::Utilities => "#14b8a6",
            Category::Healthcare => "#ef4444",
            Category::Education => "#eab308",
            Category::Personal => "#22c55e",
            Category::Other => "#6b7280",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod category_tests {
    use crate::Error;

    use super::Category;

    #[test]
    fn round_trips_through_str() {
        for category in Category::ALL {
            let parsed = category.as_str().parse::<Category>();

            assert_eq!(parsed, Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let result = "groceries".parse::<Category>();

        assert_eq!(result, Err(Error::UnknownCategory("groceries".to_owned())));
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Category::Transportation).unwrap();

        assert_eq!(json, "\"transportation\"");
    }

    #[test]
    fn all_has_no_duplicates() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert!(
                !Category::ALL[i + 1..].contains(category),
                "category {category} appears more than once"
            );
        }
    }
}
