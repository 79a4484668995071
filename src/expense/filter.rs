//! Filter state for the expenses list.

use std::{fmt::Display, str::FromStr};

use time::Date;

use crate::{Error, expense::Category};

/// The category selector of the expenses list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show expenses from every category.
    #[default]
    All,
    /// Show only expenses with the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether an expense with `category` passes the filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// An inclusive calendar date range. Either bound may be unset, which
/// imposes no constraint on that side.
///
/// Because the bounds are whole calendar dates, an inclusive `to` bound
/// covers the entire final day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first date included in the range, if bounded below.
    pub from: Option<Date>,
    /// The last date included in the range, if bounded above.
    pub to: Option<Date>,
}

impl DateRange {
    /// Create a date range. Bounds that are `None` are unbounded.
    pub fn new(from: Option<Date>, to: Option<Date>) -> Self {
        Self { from, to }
    }

    /// Whether `date` falls within the range, inclusive on both ends.
    pub fn contains(&self, date: Date) -> bool {
        if let Some(from) = self.from
            && date < from
        {
            return false;
        }

        if let Some(to) = self.to
            && date > to
        {
            return false;
        }

        true
    }
}

/// The active filter settings of the expenses list.
///
/// Owned by [crate::ExpenseStore], reset only by explicit user action and
/// never persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseFilter {
    /// The active category selector.
    pub category: CategoryFilter,
    /// The active date range, if any.
    pub date_range: Option<DateRange>,
}

impl ExpenseFilter {
    /// Whether any non-default filter is active.
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All
            || self
                .date_range
                .is_some_and(|range| range.from.is_some() || range.to.is_some())
    }
}

#[cfg(test)]
mod filter_tests {
    use time::macros::date;

    use crate::expense::Category;

    use super::{CategoryFilter, DateRange, ExpenseFilter};

    #[test]
    fn all_matches_every_category() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn only_matches_single_category() {
        let filter = CategoryFilter::Only(Category::Food);

        assert!(filter.matches(Category::Food));
        assert!(!filter.matches(Category::Housing));
    }

    #[test]
    fn parses_all_and_categories() {
        assert_eq!("all".parse(), Ok(CategoryFilter::All));
        assert_eq!("food".parse(), Ok(CategoryFilter::Only(Category::Food)));
        assert!("brunch".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = DateRange::new(Some(date!(2024 - 01 - 01)), Some(date!(2024 - 01 - 31)));

        assert!(range.contains(date!(2024 - 01 - 01)));
        assert!(range.contains(date!(2024 - 01 - 15)));
        assert!(range.contains(date!(2024 - 01 - 31)));
        assert!(!range.contains(date!(2023 - 12 - 31)));
        assert!(!range.contains(date!(2024 - 02 - 01)));
    }

    #[test]
    fn unset_bounds_do_not_constrain() {
        let unbounded_below = DateRange::new(None, Some(date!(2024 - 01 - 31)));
        let unbounded_above = DateRange::new(Some(date!(2024 - 01 - 01)), None);
        let unbounded = DateRange::new(None, None);

        assert!(unbounded_below.contains(date!(1970 - 01 - 01)));
        assert!(unbounded_above.contains(date!(2999 - 12 - 31)));
        assert!(unbounded.contains(date!(2024 - 06 - 15)));
    }

    #[test]
    fn default_filter_is_inactive() {
        assert!(!ExpenseFilter::default().is_active());
    }

    #[test]
    fn empty_date_range_counts_as_inactive() {
        let filter = ExpenseFilter {
            category: CategoryFilter::All,
            date_range: Some(DateRange::new(None, None)),
        };

        assert!(!filter.is_active());
    }

    #[test]
    fn category_selection_counts_as_active() {
        let filter = ExpenseFilter {
            category: CategoryFilter::Only(Category::Utilities),
            date_range: None,
        };

        assert!(filter.is_active());
    }
}
