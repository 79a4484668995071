//! Spendlog is a web app for keeping track of your day-to-day expenses.
//!
//! This library provides a server that directly serves HTML pages backed by
//! an in-memory expense store which is mirrored to a JSON file on disk.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod expense;
mod html;
mod navigation;
mod not_found;
mod routing;
mod storage;
mod store;
#[cfg(test)]
mod test_utils;
mod theme;

pub use app_state::AppState;
pub use expense::{
    Category, CategoryFilter, DateRange, Expense, ExpenseDraft, ExpenseFilter, ExpenseId,
};
pub use routing::build_router;
pub use storage::JsonStorage;
pub use store::ExpenseStore;
pub use theme::Theme;

use crate::{
    alert::error_alert,
    html::{render, render_error_page},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount field of the expense form was empty, not a number, or not
    /// a positive number.
    #[error("\"{0}\" is not a valid amount, expected a positive number")]
    InvalidAmount(String),

    /// The description field of the expense form was empty after trimming
    /// whitespace.
    #[error("the description cannot be empty")]
    EmptyDescription,

    /// The date field of the expense form was missing or could not be parsed
    /// as a calendar date.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The category field of the expense form did not name one of the fixed
    /// expense categories.
    #[error("\"{0}\" is not a valid expense category")]
    UnknownCategory(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., ID) are correct and that the resource has been
    /// created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The durable storage slot could not be written.
    ///
    /// Mirroring is a fire-and-forget side effect, so this error is logged
    /// as a warning and the in-memory state is kept.
    #[error("could not write the storage slot: {0}")]
    StorageWrite(String),

    /// An error occurred while serializing or deserializing the expense
    /// collection as JSON.
    #[error("could not convert the expense collection to or from JSON: {0}")]
    Serialization(String),

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_error_page(
                    "Something went wrong",
                    "An unexpected error occurred. Try again later or check the logs on the server.",
                )
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            error @ Error::InvalidAmount(_) => render(
                StatusCode::BAD_REQUEST,
                error_alert("Invalid amount", &error.to_string()),
            ),
            Error::EmptyDescription => render(
                StatusCode::BAD_REQUEST,
                error_alert(
                    "Invalid description",
                    "The description cannot be empty. Describe what the expense was for.",
                ),
            ),
            error @ Error::InvalidDate(_) => render(
                StatusCode::BAD_REQUEST,
                error_alert(
                    "Invalid date",
                    &format!("{error}. Enter the date the expense was incurred."),
                ),
            ),
            error @ Error::UnknownCategory(_) => render(
                StatusCode::BAD_REQUEST,
                error_alert("Invalid category", &error.to_string()),
            ),
            Error::NotFound => render(
                StatusCode::NOT_FOUND,
                error_alert(
                    "Could not find expense",
                    "The expense could not be found. \
                    Try refreshing the page to see if it has already been deleted.",
                ),
            ),
            _ => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_alert(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        }
    }
}
