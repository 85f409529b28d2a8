//! Site router composition.
//!
//! The base, changes and lesson routers are merged into one site router,
//! which is mounted unprefixed and again under every locale prefix.

use std::collections::BTreeSet;
use std::time::Duration;

use axum::{middleware, routing::get, Extension, Router};
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::base::{base_router, handlers::home};
use super::changes::changes_router;
use super::errors::{not_found_fallback, server_error_page};
use super::lesson::lesson_router;
use super::middleware::{auth_middleware, AuthState};
use super::state::AppState;
use super::urls::{LocalePrefix, ROUTES};
use crate::domain::lesson::Project;

/// Router-level settings.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Locale prefixes the site is also served under, e.g. `["en", "id"]`.
    pub locales: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string(), "id".to_string()],
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl RouterConfig {
    /// Leading path segments claimed by static routes and locale prefixes.
    pub fn reserved_segments(&self) -> BTreeSet<String> {
        ROUTES
            .iter()
            .filter_map(|route| route.pattern.split('/').nth(1))
            .filter(|segment| !segment.is_empty() && !segment.starts_with(':'))
            .map(str::to_string)
            .chain(self.locales.iter().cloned())
            .collect()
    }

    /// Projects whose slug collides with a reserved segment. Their
    /// unprefixed URLs are routed to the static or locale route instead.
    pub fn shadowed_projects<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let reserved = self.reserved_segments();
        projects
            .iter()
            .filter(|project| reserved.contains(project.slug.as_str()))
            .collect()
    }
}

/// All page routes, unprefixed.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(base_router())
        .merge(changes_router())
        .merge(lesson_router())
}

/// Builds the complete application.
pub fn app_router(state: AppState, auth: AuthState, config: &RouterConfig) -> Router {
    let mut router = site_routes();
    for locale in &config.locales {
        let prefix = Extension(LocalePrefix(locale.clone()));
        // Nesting maps the inner `/` to `/{locale}` only.
        router = router
            .route(&format!("/{}/", locale), get(home).layer(prefix.clone()))
            .nest(&format!("/{}", locale), site_routes().layer(prefix));
    }

    router
        .fallback(not_found_fallback)
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(server_error_page))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
