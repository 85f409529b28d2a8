//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates session tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that redirects anonymous requests to the login page
//! - `OptionalAuth` - Extractor for optional authentication
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, keeping it provider-agnostic.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser + LoginUrl into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The token is read from `Authorization: Bearer <token>` or, for browsers,
//! from the session cookie.

use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, OriginalUri, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, error, warn};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

use super::super::errors::HttpError;

/// Auth middleware state.
#[derive(Clone)]
pub struct AuthState {
    pub validator: Arc<dyn SessionValidator>,
    pub login_url: String,
    pub cookie_name: String,
}

impl AuthState {
    pub fn new(
        validator: Arc<dyn SessionValidator>,
        login_url: impl Into<String>,
        cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            validator,
            login_url: login_url.into(),
            cookie_name: cookie_name.into(),
        }
    }
}

/// Login page anonymous requests are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginUrl(pub String);

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

fn cookie_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Authentication middleware.
///
/// 1. Extracts the token from the Authorization header or the session cookie
/// 2. Validates it using the `SessionValidator` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On a missing, invalid or expired token, continues anonymously
/// 5. When the auth service is down, returns 503
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    request
        .extensions_mut()
        .insert(LoginUrl(auth.login_url.clone()));

    let token = bearer_token(request.headers())
        .or_else(|| cookie_token(request.headers(), &auth.cookie_name))
        .map(str::to_owned);

    if let Some(token) = token {
        match auth.validator.validate(&token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(AuthError::ServiceUnavailable(msg)) => {
                error!("Auth service unavailable: {}", msg);
                return HttpError::Unavailable.into_response();
            }
            Err(AuthError::TokenExpired) => {
                debug!("Session token expired, continuing anonymously");
            }
            Err(AuthError::InvalidToken) => {
                warn!("Rejected invalid session token");
            }
        }
    }

    next.run(request).await
}

/// Extractor that requires authentication.
///
/// Anonymous requests are redirected to the login URL with the original
/// path and query in `next`.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(RequireAuth(user.clone()));
        }

        let login_url = parts
            .extensions
            .get::<LoginUrl>()
            .map(|LoginUrl(url)| url.clone())
            .unwrap_or_else(|| "/accounts/login/".to_string());
        let next = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri)
            .unwrap_or(&parts.uri)
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        Err(AuthRejection::Unauthenticated { login_url, next })
    }
}

/// Extractor for optional authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No valid session; carries where to send the user.
    Unauthenticated { login_url: String, next: String },
}

impl AuthRejection {
    /// `login_url?next=<encoded next>`.
    pub fn location(&self) -> String {
        let AuthRejection::Unauthenticated { login_url, next } = self;
        let encoded: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
        let separator = if login_url.contains('?') { '&' } else { '?' };
        format!("{}{}next={}", login_url, separator, encoded)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        Redirect::to(&self.location()).into_response()
    }
}
