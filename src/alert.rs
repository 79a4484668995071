//! Alert fragments for displaying success and error messages to users.
//!
//! Form endpoints return these fragments with an error status code so that
//! htmx (with the response-targets extension) swaps them into the page's
//! alert container instead of the form target.

use maud::{Markup, html};

const ALERT_CONTAINER_STYLE: &str = "flex items-center p-4 mb-4 rounded-lg shadow-lg border";

const ERROR_STYLE: &str = "text-red-800 bg-red-50 border-red-300 \
    dark:bg-gray-800 dark:text-red-400 dark:border-red-800";

const SUCCESS_STYLE: &str = "text-green-800 bg-green-50 border-green-300 \
    dark:bg-gray-800 dark:text-green-400 dark:border-green-800";

fn alert(style: &str, message: &str, details: &str) -> Markup {
    html!(
        div
            class={ (ALERT_CONTAINER_STYLE) " " (style) }
            role="alert"
        {
            div class="text-sm"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        }
    )
}

/// An error alert fragment with a bold `message` and explanatory `details`.
pub fn error_alert(message: &str, details: &str) -> Markup {
    alert(ERROR_STYLE, message, details)
}

/// A success alert fragment.
#[allow(dead_code)]
pub fn success_alert(message: &str, details: &str) -> Markup {
    alert(SUCCESS_STYLE, message, details)
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use super::{error_alert, success_alert};

    #[test]
    fn error_alert_contains_message_and_details() {
        let markup = error_alert("Invalid amount", "Amount must be positive.");
        let fragment = Html::parse_fragment(&markup.into_string());

        let selector = Selector::parse("div[role=alert]").unwrap();
        let alert = fragment.select(&selector).next().expect("no alert div");
        let text = alert.text().collect::<String>();
        assert!(text.contains("Invalid amount"));
        assert!(text.contains("Amount must be positive."));
    }

    #[test]
    fn details_paragraph_is_omitted_when_empty() {
        let markup = success_alert("Saved", "");
        let fragment = Html::parse_fragment(&markup.into_string());

        let selector = Selector::parse("p").unwrap();
        assert_eq!(fragment.select(&selector).count(), 1);
    }
}
