//! Projecta server entry point.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use projecta::adapters::auth::{JwtConfig, JwtSessionValidator};
use projecta::adapters::http::{app_router, AppState, AuthState, RouterConfig, SiteSettings};
use projecta::adapters::link_checker::{HttpLinkChecker, HttpLinkCheckerConfig};
use projecta::adapters::memory::{InMemoryEntryStore, InMemoryLessonStore};
use projecta::adapters::pdf::WkhtmlToPdfRenderer;
use projecta::adapters::postgres::{
    PostgresEntryRepository, PostgresFurtherReadingRepository, PostgresLessonReader,
};
use projecta::config::{AppConfig, DatabaseConfig};
use projecta::ports::{EntryRepository, FurtherReadingRepository, LessonReader, PdfRenderer};

type Stores = (
    Arc<dyn LessonReader>,
    Arc<dyn FurtherReadingRepository>,
    Arc<dyn EntryRepository>,
);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let (lesson_reader, further_reading_repository, entry_repository) =
        connect_stores(&config.database).await?;

    let router_config = RouterConfig {
        locales: config.site.locales.clone(),
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
    };
    match lesson_reader.list_projects().await {
        Ok(projects) => {
            for project in router_config.shadowed_projects(&projects) {
                warn!(
                    slug = %project.slug,
                    "Project slug matches a static route or locale, its unprefixed pages are unreachable"
                );
            }
        }
        Err(e) => warn!(error = %e, "Could not check project slugs against reserved routes"),
    }

    let link_checker = Arc::new(HttpLinkChecker::new(HttpLinkCheckerConfig {
        timeout: config.link_checker.timeout(),
        user_agent: config.link_checker.user_agent.clone(),
    })?);

    let mut pdf_renderer = WkhtmlToPdfRenderer::new().with_timeout(config.pdf.timeout_secs);
    if let Some(path) = &config.pdf.wkhtmltopdf_path {
        pdf_renderer = pdf_renderer.with_binary_path(path.clone());
    }
    if !pdf_renderer.is_available().await {
        warn!("wkhtmltopdf not found, report printing will fail");
    }

    let state = AppState::new(
        lesson_reader,
        further_reading_repository,
        entry_repository,
        link_checker,
        Arc::new(pdf_renderer),
    )
    .with_settings(SiteSettings {
        entries_per_page: config.site.entries_per_page,
        link_check_concurrency: config.link_checker.concurrency,
    });

    let validator = JwtSessionValidator::new(&JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.issuer.clone(),
        config.auth.audience.clone(),
    ));
    let auth = AuthState::new(
        Arc::new(validator),
        config.auth.login_url.clone(),
        config.auth.cookie_name.clone(),
    );

    let app = app_router(state, auth, &router_config);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect_stores(database: &DatabaseConfig) -> Result<Stores, Box<dyn std::error::Error>> {
    let Some(url) = database.url() else {
        warn!("No database URL configured, using in-memory stores");
        let lessons = Arc::new(InMemoryLessonStore::new());
        let lesson_reader: Arc<dyn LessonReader> = lessons.clone();
        let further_reading: Arc<dyn FurtherReadingRepository> = lessons;
        let entries: Arc<dyn EntryRepository> = Arc::new(InMemoryEntryStore::new());
        return Ok((lesson_reader, further_reading, entries));
    };

    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .connect(url)
        .await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let lesson_reader: Arc<dyn LessonReader> = Arc::new(PostgresLessonReader::new(pool.clone()));
    let further_reading: Arc<dyn FurtherReadingRepository> =
        Arc::new(PostgresFurtherReadingRepository::new(pool.clone()));
    let entries: Arc<dyn EntryRepository> = Arc::new(PostgresEntryRepository::new(pool));
    Ok((lesson_reader, further_reading, entries))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
