//! Route configuration for changelog pages.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::super::urls::paths;
use super::handlers::{
    create_entry, create_entry_form, delete_entry, delete_entry_confirm, entry_detail,
    entry_list, update_entry, update_entry_form,
};

/// Creates the changelog router.
///
/// Routes:
/// - `GET /entry/list/` - Paginated entries, newest first
/// - `GET /entry/:pk/` - One entry
/// - `GET|POST /entry/create/` - New entry
/// - `GET|POST /entry/update/:pk/` - Edit entry
/// - `GET|POST /entry/delete/:pk/` - Confirm and delete entry
pub fn changes_router() -> Router<AppState> {
    Router::new()
        .route(paths::ENTRY_LIST, get(entry_list))
        .route(paths::ENTRY_CREATE, get(create_entry_form).post(create_entry))
        .route(paths::ENTRY_DETAIL, get(entry_detail))
        .route(paths::ENTRY_UPDATE, get(update_entry_form).post(update_entry))
        .route(paths::ENTRY_DELETE, get(delete_entry_confirm).post(delete_entry))
}
