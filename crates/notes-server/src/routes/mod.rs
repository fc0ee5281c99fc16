//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;
pub mod pages;

use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// The HTML page is only mounted when enabled in the configuration.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(health::routes())
        .merge(notes::routes());

    if state.config().html_page_enabled {
        router = router.merge(pages::routes());
    }

    router.fallback(route_not_found).with_state(state)
}

/// Fallback for paths no route matches.
async fn route_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
