//! Route configuration for lesson and report pages.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::super::urls::paths;
use super::handlers::{
    create_further_reading, create_further_reading_form, delete_further_reading,
    delete_further_reading_confirm, invalid_further_reading, print_invalid_further_reading,
    update_further_reading, update_further_reading_form, worksheet_detail,
};

/// Creates the lesson router.
///
/// Routes:
/// - `GET /:project_slug/lesson/:section_slug/worksheet/:worksheet/` - Worksheet with its further reading
/// - `GET|POST .../further-reading/create/` - Add further reading
/// - `GET|POST .../further-reading/:pk/update/` - Edit further reading
/// - `GET|POST .../further-reading/:pk/delete/` - Confirm and delete further reading
/// - `GET /:project_slug/invalid-further-reading/` - Invalid link report (JSON)
/// - `GET /:project_slug/print-invalid-further-reading/` - Invalid link report (PDF)
pub fn lesson_router() -> Router<AppState> {
    Router::new()
        .route(paths::WORKSHEET_DETAIL, get(worksheet_detail))
        .route(
            paths::FURTHER_READING_CREATE,
            get(create_further_reading_form).post(create_further_reading),
        )
        .route(
            paths::FURTHER_READING_UPDATE,
            get(update_further_reading_form).post(update_further_reading),
        )
        .route(
            paths::FURTHER_READING_DELETE,
            get(delete_further_reading_confirm).post(delete_further_reading),
        )
        .route(paths::INVALID_FURTHER_READING, get(invalid_further_reading))
        .route(
            paths::PRINT_INVALID_FURTHER_READING,
            get(print_invalid_further_reading),
        )
}
