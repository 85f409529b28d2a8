//! Named route table and reverse URL generation.
//!
//! Every page route is declared once here. The routers mount these
//! patterns and handlers build redirect and link targets with `reverse`,
//! so a pattern change cannot leave a stale link behind.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::http::request::Parts;
use axum::extract::FromRequestParts;
use thiserror::Error;

/// Route names.
pub mod names {
    pub const HOME: &str = "home";
    pub const ENTRY_LIST: &str = "entry-list";
    pub const ENTRY_DETAIL: &str = "entry-detail";
    pub const ENTRY_CREATE: &str = "entry-create";
    pub const ENTRY_UPDATE: &str = "entry-update";
    pub const ENTRY_DELETE: &str = "entry-delete";
    pub const WORKSHEET_DETAIL: &str = "worksheet-detail";
    pub const FURTHER_READING_CREATE: &str = "further-reading-create";
    pub const FURTHER_READING_UPDATE: &str = "further-reading-update";
    pub const FURTHER_READING_DELETE: &str = "further-reading-delete";
    pub const INVALID_FURTHER_READING: &str = "invalid-further-reading";
    pub const PRINT_INVALID_FURTHER_READING: &str = "print-invalid-further-reading";
}

/// Route patterns, in axum path syntax.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ENTRY_LIST: &str = "/entry/list/";
    pub const ENTRY_DETAIL: &str = "/entry/:pk/";
    pub const ENTRY_CREATE: &str = "/entry/create/";
    pub const ENTRY_UPDATE: &str = "/entry/update/:pk/";
    pub const ENTRY_DELETE: &str = "/entry/delete/:pk/";
    pub const WORKSHEET_DETAIL: &str = "/:project_slug/lesson/:section_slug/worksheet/:worksheet/";
    pub const FURTHER_READING_CREATE: &str =
        "/:project_slug/lesson/:section_slug/worksheet/:worksheet/further-reading/create/";
    pub const FURTHER_READING_UPDATE: &str =
        "/:project_slug/lesson/:section_slug/worksheet/:worksheet/further-reading/:pk/update/";
    pub const FURTHER_READING_DELETE: &str =
        "/:project_slug/lesson/:section_slug/worksheet/:worksheet/further-reading/:pk/delete/";
    pub const INVALID_FURTHER_READING: &str = "/:project_slug/invalid-further-reading/";
    pub const PRINT_INVALID_FURTHER_READING: &str = "/:project_slug/print-invalid-further-reading/";
}

/// A pattern and its symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRoute {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const ROUTES: &[NamedRoute] = &[
    NamedRoute { name: names::HOME, pattern: paths::HOME },
    NamedRoute { name: names::ENTRY_LIST, pattern: paths::ENTRY_LIST },
    NamedRoute { name: names::ENTRY_DETAIL, pattern: paths::ENTRY_DETAIL },
    NamedRoute { name: names::ENTRY_CREATE, pattern: paths::ENTRY_CREATE },
    NamedRoute { name: names::ENTRY_UPDATE, pattern: paths::ENTRY_UPDATE },
    NamedRoute { name: names::ENTRY_DELETE, pattern: paths::ENTRY_DELETE },
    NamedRoute { name: names::WORKSHEET_DETAIL, pattern: paths::WORKSHEET_DETAIL },
    NamedRoute { name: names::FURTHER_READING_CREATE, pattern: paths::FURTHER_READING_CREATE },
    NamedRoute { name: names::FURTHER_READING_UPDATE, pattern: paths::FURTHER_READING_UPDATE },
    NamedRoute { name: names::FURTHER_READING_DELETE, pattern: paths::FURTHER_READING_DELETE },
    NamedRoute { name: names::INVALID_FURTHER_READING, pattern: paths::INVALID_FURTHER_READING },
    NamedRoute {
        name: names::PRINT_INVALID_FURTHER_READING,
        pattern: paths::PRINT_INVALID_FURTHER_READING,
    },
];

/// Errors building a URL from the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
    #[error("no route named '{0}'")]
    UnknownRoute(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParameter { route: String, param: String },

    #[error("route '{route}' has no parameter '{param}'")]
    UnexpectedParameter { route: String, param: String },

    #[error("parameter '{param}' of route '{route}' cannot be used in a path segment")]
    InvalidParameter { route: String, param: String },
}

pub fn pattern(name: &str) -> Option<&'static str> {
    ROUTES.iter().find(|r| r.name == name).map(|r| r.pattern)
}

/// Builds the path for `name`, substituting `:param` segments.
pub fn reverse(name: &str, params: &[(&str, String)]) -> Result<String, ReverseError> {
    let pattern = pattern(name).ok_or_else(|| ReverseError::UnknownRoute(name.to_string()))?;

    let mut used = 0;
    let mut path = String::with_capacity(pattern.len());
    for (i, segment) in pattern.split('/').enumerate() {
        if i > 0 {
            path.push('/');
        }
        match segment.strip_prefix(':') {
            Some(param) => {
                let value = params
                    .iter()
                    .find(|(key, _)| *key == param)
                    .map(|(_, value)| value)
                    .ok_or_else(|| ReverseError::MissingParameter {
                        route: name.to_string(),
                        param: param.to_string(),
                    })?;
                if value.is_empty() || value.contains(['/', '?', '#']) {
                    return Err(ReverseError::InvalidParameter {
                        route: name.to_string(),
                        param: param.to_string(),
                    });
                }
                used += 1;
                path.push_str(value);
            }
            None => path.push_str(segment),
        }
    }

    if used < params.len() {
        if let Some((extra, _)) = params
            .iter()
            .find(|(key, _)| !pattern.split('/').any(|s| s.strip_prefix(':') == Some(*key)))
        {
            return Err(ReverseError::UnexpectedParameter {
                route: name.to_string(),
                param: extra.to_string(),
            });
        }
    }

    Ok(path)
}

/// Locale prefix of the router a request was served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePrefix(pub String);

/// URL builder bound to the current request's locale.
///
/// Requests served under `/en/...` get `/en/...` links back.
#[derive(Debug, Clone, Default)]
pub struct Urls {
    locale: Option<String>,
}

impl Urls {
    pub fn new(locale: Option<String>) -> Self {
        Self { locale }
    }

    pub fn reverse(&self, name: &str, params: &[(&str, String)]) -> Result<String, ReverseError> {
        let path = reverse(name, params)?;
        Ok(match &self.locale {
            Some(locale) => format!("/{}{}", locale, path),
            None => path,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Urls
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = parts
            .extensions
            .get::<LocalePrefix>()
            .map(|LocalePrefix(locale)| locale.clone());
        Ok(Urls::new(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample(param: &str) -> String {
        match param {
            "pk" => "7".to_string(),
            "worksheet" => "12".to_string(),
            other => format!("{}-x", other.replace('_', "-")),
        }
    }

    #[test]
    fn route_names_are_unique() {
        let names: HashSet<&str> = ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn every_route_round_trips() {
        for route in ROUTES {
            let keys: Vec<&str> = route
                .pattern
                .split('/')
                .filter_map(|s| s.strip_prefix(':'))
                .collect();
            let params: Vec<(&str, String)> = keys.iter().map(|k| (*k, sample(k))).collect();

            let url = reverse(route.name, &params).unwrap();

            let rebuilt: Vec<String> = route
                .pattern
                .split('/')
                .map(|s| match s.strip_prefix(':') {
                    Some(k) => sample(k),
                    None => s.to_string(),
                })
                .collect();
            assert_eq!(url, rebuilt.join("/"), "route {}", route.name);
            assert!(url.ends_with('/'));
        }
    }

    #[test]
    fn worksheet_detail_url() {
        let url = reverse(
            names::WORKSHEET_DETAIL,
            &[
                ("project_slug", "qgis".to_string()),
                ("section_slug", "vector".to_string()),
                ("worksheet", "12".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(url, "/qgis/lesson/vector/worksheet/12/");
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let err = reverse(names::ENTRY_DETAIL, &[]).unwrap_err();
        assert_eq!(
            err,
            ReverseError::MissingParameter {
                route: "entry-detail".to_string(),
                param: "pk".to_string()
            }
        );
    }

    #[test]
    fn unexpected_parameter_is_an_error() {
        let err = reverse(names::HOME, &[("pk", "1".to_string())]).unwrap_err();
        assert!(matches!(err, ReverseError::UnexpectedParameter { .. }));
    }

    #[test]
    fn slash_in_parameter_is_rejected() {
        let err = reverse(names::ENTRY_DETAIL, &[("pk", "1/2".to_string())]).unwrap_err();
        assert!(matches!(err, ReverseError::InvalidParameter { .. }));
    }

    #[test]
    fn unknown_route_is_an_error() {
        assert_eq!(
            reverse("nope", &[]),
            Err(ReverseError::UnknownRoute("nope".to_string()))
        );
    }

    #[test]
    fn localized_urls_are_prefixed() {
        let urls = Urls::new(Some("id".to_string()));
        assert_eq!(urls.reverse(names::ENTRY_LIST, &[]).unwrap(), "/id/entry/list/");
        assert_eq!(Urls::default().reverse(names::HOME, &[]).unwrap(), "/");
    }
}
