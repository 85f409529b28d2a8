//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `PROJECTA` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use projecta::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod link_checker;
mod pdf;
mod server;
mod site;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use link_checker::LinkCheckerConfig;
pub use pdf::PdfConfig;
pub use server::{Environment, ServerConfig};
pub use site::SiteConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub link_checker: LinkCheckerConfig,

    #[serde(default)]
    pub pdf: PdfConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROJECTA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `site.locales` on commas
    ///
    /// - `PROJECTA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PROJECTA__SITE__LOCALES=en,id,fr` -> `site.locales = ["en", "id", "fr"]`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROJECTA")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("site.locales")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate(&self.server.environment)?;
        self.auth.validate(&self.server.environment)?;
        self.site.validate()?;
        self.link_checker.validate()?;
        self.pdf.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PROJECTA__AUTH__JWT_SECRET",
        "PROJECTA__DATABASE__URL",
        "PROJECTA__SERVER__PORT",
        "PROJECTA__SERVER__ENVIRONMENT",
        "PROJECTA__SITE__LOCALES",
        "PROJECTA__SITE__ENTRIES_PER_PAGE",
    ];

    fn set_minimal_env() {
        env::set_var("PROJECTA__AUTH__JWT_SECRET", "dev-secret");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_minimal_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.url(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_and_lists() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PROJECTA__SERVER__PORT", "3000");
        env::set_var("PROJECTA__DATABASE__URL", "postgresql://localhost/projecta");
        env::set_var("PROJECTA__SITE__LOCALES", "en,fr");
        env::set_var("PROJECTA__SITE__ENTRIES_PER_PAGE", "25");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url(), Some("postgresql://localhost/projecta"));
        assert_eq!(config.site.locales, vec!["en", "fr"]);
        assert_eq!(config.site.entries_per_page, 25);
    }

    #[test]
    fn test_production_without_database_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PROJECTA__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }
}
