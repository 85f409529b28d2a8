//! HTTP error mapping and error pages.
//!
//! Handlers return `HttpError`; it renders the 404, 400 and 503 pages
//! directly. A 500 is rendered by `server_error_page`, which knows the
//! request method and path.

use axum::{
    extract::{OriginalUri, Request},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::domain::changes::EntryError;
use crate::domain::lesson::LessonError;
use crate::ports::RenderError;

use super::pages;
use super::urls::ReverseError;

/// Marker on a response body that still needs the 500 page.
#[derive(Debug, Clone, Copy)]
struct NeedsErrorPage;

/// Error returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    NotFound,
    BadRequest(String),
    Unavailable,
    Internal(String),
}

impl HttpError {
    pub fn internal(message: impl Into<String>) -> Self {
        HttpError::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            HttpError::NotFound => (status, Html(pages::not_found())).into_response(),
            HttpError::BadRequest(message) => {
                (status, Html(pages::bad_request(&message))).into_response()
            }
            HttpError::Unavailable => (status, Html(pages::service_unavailable())).into_response(),
            HttpError::Internal(message) => {
                error!(error = %message, "Request failed");
                let mut response = status.into_response();
                response.extensions_mut().insert(NeedsErrorPage);
                response
            }
        }
    }
}

impl From<LessonError> for HttpError {
    fn from(err: LessonError) -> Self {
        match err {
            e if e.is_not_found() => HttpError::NotFound,
            LessonError::ValidationFailed(errors) => HttpError::BadRequest(errors.to_string()),
            e => HttpError::Internal(e.message()),
        }
    }
}

impl From<EntryError> for HttpError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::NotFound(_) => HttpError::NotFound,
            EntryError::ValidationFailed(errors) => HttpError::BadRequest(errors.to_string()),
            EntryError::Infrastructure(message) => HttpError::Internal(message),
        }
    }
}

impl From<ReverseError> for HttpError {
    fn from(err: ReverseError) -> Self {
        HttpError::Internal(err.to_string())
    }
}

impl From<RenderError> for HttpError {
    fn from(err: RenderError) -> Self {
        HttpError::Internal(err.to_string())
    }
}

/// Fallback for paths no route matches.
pub async fn not_found_fallback() -> HttpError {
    HttpError::NotFound
}

/// Replaces bare 500 responses with the error page.
///
/// Covers handler errors and panics caught by `CatchPanicLayer`. Responses
/// that already carry an HTML body are left untouched.
pub async fn server_error_page(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;
    if response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"));
    if is_html && response.extensions().get::<NeedsErrorPage>().is_none() {
        return response;
    }

    render_server_error(&method, &path)
}

fn render_server_error(method: &Method, path: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(pages::server_error(method.as_str(), path)),
    )
        .into_response()
}
