//! The dark/light theme preference and its toggle endpoint.

use std::{fmt::Display, str::FromStr};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_htmx::HxRefresh;

use crate::{AppState, storage::JsonStorage};

/// The UI color theme.
///
/// Persisted as a plain string in its own storage slot, independent of the
/// expense collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark backgrounds, light text.
    Dark,
    /// Light backgrounds, dark text.
    #[default]
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(()),
        }
    }
}

/// The state needed to toggle the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeState {
    /// The storage adapter holding the theme slot.
    pub storage: JsonStorage,
}

impl FromRef<AppState> for ThemeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }
}

/// A route handler that flips the stored theme preference and asks the
/// client to refresh so every page picks up the new theme.
///
/// A failed write keeps the old preference, which is a cosmetic loss only,
/// so the response is a refresh either way.
pub async fn toggle_theme_endpoint(State(state): State<ThemeState>) -> impl IntoResponse {
    let theme = state.storage.load_theme().toggled();

    if let Err(error) = state.storage.save_theme(theme) {
        tracing::warn!("could not save theme preference: {error}");
    }

    (HxRefresh(true), StatusCode::OK)
}

#[cfg(test)]
mod theme_tests {
    use axum::extract::State;
    use axum::response::IntoResponse;
    use tempfile::TempDir;

    use crate::storage::JsonStorage;

    use super::{Theme, ThemeState, toggle_theme_endpoint};

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn parses_stored_strings() {
        assert_eq!("dark".parse(), Ok(Theme::Dark));
        assert_eq!("light".parse(), Ok(Theme::Light));
        assert!("midnight".parse::<Theme>().is_err());
    }

    #[tokio::test]
    async fn endpoint_persists_toggled_theme_and_requests_refresh() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();
        let state = ThemeState {
            storage: storage.clone(),
        };

        let response = toggle_theme_endpoint(State(state)).await.into_response();

        assert_eq!(storage.load_theme(), Theme::Dark);
        assert_eq!(
            response
                .headers()
                .get("hx-refresh")
                .expect("expected response to have the header hx-refresh"),
            "true"
        );
    }
}
