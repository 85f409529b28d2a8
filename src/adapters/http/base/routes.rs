//! Route configuration for site-level pages.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::super::urls::paths;
use super::handlers::home;

/// Creates the base router.
///
/// Routes:
/// - `GET /` - Project list
pub fn base_router() -> Router<AppState> {
    Router::new().route(paths::HOME, get(home))
}
