//! The shared expense form: field rendering and validation.
//!
//! Validation happens here, before a store operation is issued. The store
//! itself never re-checks amounts or descriptions.

use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    Error,
    expense::{Category, ExpenseDraft},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The raw form data for creating or editing an expense.
///
/// Fields are kept as strings so that validation failures (a non-numeric
/// amount, a missing date) surface as alerts instead of deserialization
/// errors.
#[derive(Debug, Deserialize)]
pub struct ExpenseFormData {
    /// The value of the expense in dollars.
    #[serde(default)]
    pub amount: String,
    /// The category the expense belongs to.
    #[serde(default)]
    pub category: String,
    /// Text detailing the expense.
    #[serde(default)]
    pub description: String,
    /// The date when the expense was incurred.
    #[serde(default)]
    pub date: String,
}

impl ExpenseFormData {
    /// Validate the form fields and build an [ExpenseDraft].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is empty, not a number, or not positive,
    /// - or [Error::EmptyDescription] if the description is empty after trimming,
    /// - or [Error::InvalidDate] if the date is missing or not a calendar date,
    /// - or [Error::UnknownCategory] if the category is not one of the fixed set.
    pub fn validate(&self) -> Result<ExpenseDraft, Error> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| *amount > 0.0 && amount.is_finite())
            .ok_or_else(|| Error::InvalidAmount(self.amount.clone()))?;

        let category = self.category.parse::<Category>()?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        let date = parse_form_date(&self.date)?;

        Ok(ExpenseDraft::new(amount, category, description, date))
    }
}

/// Parse a date from an HTML date input, e.g. "2024-03-01".
pub fn parse_form_date(value: &str) -> Result<Date, Error> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(value.to_owned()))
}

/// The values the expense form fields start with.
pub struct ExpenseFormDefaults<'a> {
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub description: Option<&'a str>,
    pub date: Date,
    pub autofocus_amount: bool,
}

pub fn expense_form_fields(defaults: &ExpenseFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));
    let description_placeholder = "What was this expense for?";

    html! {
        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    min="0.01"
                    required
                    value=[amount_str.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in Category::ALL {
                    @if Some(category) == defaults.category {
                        option value=(category) selected { (category.label()) }
                    } @else {
                        option value=(category) { (category.label()) }
                    }
                }
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder=(description_placeholder)
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
