//! reqwest-based link checker.
//!
//! Policy:
//! - URL must parse and use `http` or `https`
//! - `HEAD` first, retried as `GET` when the server answers 405 or 501
//! - Any status >= 400 is invalid
//! - Connection failures and timeouts are invalid

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use thiserror::Error;
use url::Url;

use crate::ports::{LinkChecker, LinkStatus};

/// Why a link failed its check. The display text is the report reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkCheckError {
    #[error("malformed URL: {0}")]
    Malformed(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP client could not be built: {0}")]
    Client(String),
}

/// Settings for `HttpLinkChecker`.
#[derive(Debug, Clone)]
pub struct HttpLinkCheckerConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpLinkCheckerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("projecta-link-checker/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Checks links by requesting them over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    pub fn new(config: HttpLinkCheckerConfig) -> Result<Self, LinkCheckError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| LinkCheckError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Parses `raw` and rejects anything that is not an absolute http(s) URL.
    fn parse(raw: &str) -> Result<Url, LinkCheckError> {
        let url = Url::parse(raw.trim()).map_err(|e| LinkCheckError::Malformed(e.to_string()))?;
        match url.scheme() {
            "http" | "https" if url.host_str().is_some() => Ok(url),
            "http" | "https" => Err(LinkCheckError::Malformed("missing host".to_string())),
            other => Err(LinkCheckError::Malformed(format!(
                "unsupported scheme '{}'",
                other
            ))),
        }
    }

    async fn status(&self, method: Method, url: Url) -> Result<StatusCode, LinkCheckError> {
        self.client
            .request(method, url)
            .send()
            .await
            .map(|response| response.status())
            .map_err(|e| LinkCheckError::Unreachable(e.to_string()))
    }

    pub async fn try_check(&self, raw: &str) -> Result<(), LinkCheckError> {
        let url = Self::parse(raw)?;

        let mut status = self.status(Method::HEAD, url.clone()).await?;
        if status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED {
            status = self.status(Method::GET, url).await?;
        }

        if status.as_u16() >= 400 {
            return Err(LinkCheckError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn check(&self, url: &str) -> LinkStatus {
        match self.try_check(url).await {
            Ok(()) => LinkStatus::Valid,
            Err(e) => {
                tracing::warn!(url = %url, reason = %e, "Link check failed");
                LinkStatus::invalid(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::Router;

    fn checker() -> HttpLinkChecker {
        HttpLinkChecker::new(HttpLinkCheckerConfig {
            timeout: Duration::from_secs(5),
            ..Default::default()
        })
        .unwrap()
    }

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn malformed_urls_are_invalid_without_network() {
        let checker = checker();
        for raw in ["docs.qgis.org", "ftp://files.example.com", "http://", ""] {
            let status = checker.check(raw).await;
            match status {
                LinkStatus::Invalid(reason) => assert!(reason.starts_with("malformed URL"), "{}", reason),
                LinkStatus::Valid => panic!("{} should be invalid", raw),
            }
        }
    }

    #[tokio::test]
    async fn ok_response_is_valid() {
        let addr = serve(Router::new().route("/ok", get(|| async { "fine" }))).await;
        let status = checker().check(&format!("http://{}/ok", addr)).await;
        assert_eq!(status, LinkStatus::Valid);
    }

    #[tokio::test]
    async fn not_found_is_reported_with_code() {
        let addr = serve(Router::new()).await;
        let status = checker().check(&format!("http://{}/missing", addr)).await;
        assert_eq!(status, LinkStatus::invalid("HTTP 404"));
    }

    #[tokio::test]
    async fn head_rejection_falls_back_to_get() {
        let router = Router::new().route(
            "/get-only",
            get(|| async { "body" }).head(|| async { AxumStatus::METHOD_NOT_ALLOWED }),
        );
        let addr = serve(router).await;
        let status = checker().check(&format!("http://{}/get-only", addr)).await;
        assert_eq!(status, LinkStatus::Valid);
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let status = checker().check(&format!("http://{}/", addr)).await;
        match status {
            LinkStatus::Invalid(reason) => assert!(reason.starts_with("unreachable")),
            LinkStatus::Valid => panic!("closed port should be unreachable"),
        }
    }

    #[test]
    fn error_display_is_report_reason() {
        assert_eq!(LinkCheckError::Status(500).to_string(), "HTTP 500");
        assert_eq!(
            LinkCheckError::Malformed("relative URL without a base".into()).to_string(),
            "malformed URL: relative URL without a base"
        );
    }
}
