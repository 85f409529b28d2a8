//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum secret length accepted in production.
const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Authentication configuration (HS256 session tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret the login service signs tokens with
    pub jwt_secret: SecretString,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Where unauthenticated users are sent; `?next=` is appended
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Cookie carrying the session token when no bearer header is sent
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES
        {
            return Err(ValidationError::WeakJwtSecret);
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }
        let login = &self.login_url;
        if !(login.starts_with('/') || login.starts_with("https://") || login.starts_with("http://"))
        {
            return Err(ValidationError::InvalidLoginUrl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            issuer: default_issuer(),
            audience: default_audience(),
            login_url: default_login_url(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_issuer() -> String {
    "projecta".to_string()
}

fn default_audience() -> String {
    "projecta".to_string()
}

fn default_login_url() -> String {
    "/accounts/login/".to_string()
}

fn default_cookie_name() -> String {
    "sessionid".to_string()
}
