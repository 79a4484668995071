//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_edit_expense_page,
        get_expenses_page, get_new_expense_page, update_expense_endpoint,
    },
    not_found::get_404_not_found,
    theme::toggle_theme_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_new_expense_page))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(get_edit_expense_page))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::PUT_EXPENSE, put(update_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::TOGGLE_THEME, post(toggle_theme_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use tempfile::TempDir;

    use crate::{AppState, endpoints, storage::JsonStorage};

    use super::build_router;

    fn get_test_server() -> (TempDir, TestServer) {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        let server = TestServer::new(build_router(AppState::new(storage)));

        (dir, server)
    }

    #[tokio::test]
    async fn root_redirects_to_expenses() {
        let (_dir, server) = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            response.header("location"),
            endpoints::EXPENSES_VIEW,
            "expected the root to redirect to the expenses page"
        );
    }

    #[tokio::test]
    async fn expenses_page_is_routed() {
        let (_dir, server) = get_test_server();

        let response = server.get(endpoints::EXPENSES_VIEW).await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let (_dir, server) = get_test_server();

        let create_response = server
            .post(endpoints::EXPENSES_API)
            .form(&[
                ("amount", "12.50"),
                ("category", "food"),
                ("description", "Lunch"),
                ("date", "2024-03-01"),
            ])
            .await;
        create_response.assert_status(StatusCode::SEE_OTHER);

        let list_response = server.get(endpoints::EXPENSES_VIEW).await;
        list_response.assert_status_ok();
        let body = list_response.text();
        assert!(body.contains("Lunch"));
        assert!(body.contains("$12.50"));
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_404() {
        let (_dir, server) = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
