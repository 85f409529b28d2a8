//! HTTP handlers for site-level pages.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use super::super::errors::HttpError;
use super::super::middleware::OptionalAuth;
use super::super::pages;
use super::super::state::AppState;
use super::super::urls::Urls;

/// GET /
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    urls: Urls,
) -> Result<Response, HttpError> {
    let projects = state.list_projects_handler().handle().await?;
    Ok(Html(pages::home(&urls, user.as_ref(), &projects)?).into_response())
}
