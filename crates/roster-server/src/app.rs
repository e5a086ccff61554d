//! Application builder.

use crate::startup::shutdown_signal;
use axum::Router;
use roster_config::{format_validation_errors, AppConfig, ConfigValidator};
use roster_core::{RosterError, RosterResult};
use roster_repository::{create_pool, DatabasePool, SqliteUserRepository, UserRepository};
use roster_rest::{create_router, AppState};
use roster_service::UserServiceImpl;
use std::sync::Arc;
use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Attempts made to reach the database before giving up.
pub const CONNECT_ATTEMPTS: u32 = 5;

const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Assembled application: configuration, router, and the pool it owns.
pub struct App {
    config: AppConfig,
    router: Router,
    pool: Option<Arc<DatabasePool>>,
}

impl App {
    /// Starts building an application.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Returns the configuration the application was built from.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a handle to the router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the database pool, if the application owns one.
    pub fn pool(&self) -> Option<&Arc<DatabasePool>> {
        self.pool.as_ref()
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn serve(self) -> RosterResult<()> {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!("Starting REST server on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| RosterError::internal(format!("REST server error: {e}")))?;

        if let Some(pool) = self.pool {
            pool.close().await;
        }

        info!("Server shutdown complete");
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("addr", &self.config.server.addr())
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

/// Application builder.
///
/// Without an explicit repository the builder connects to the configured
/// SQLite database and runs migrations when `database.run_migrations` is set.
#[derive(Default)]
pub struct AppBuilder {
    config: Option<AppConfig>,
    repository: Option<Arc<dyn UserRepository>>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses the given store instead of connecting to a database.
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Connects the store and wires repository, service, state and router.
    pub async fn build(self) -> RosterResult<App> {
        let config = self.config.unwrap_or_default();
        ConfigValidator::validate(&config)
            .map_err(|errors| RosterError::configuration(format_validation_errors(&errors)))?;

        let (repository, pool) = match self.repository {
            Some(repository) => (repository, None),
            None => {
                let pool = connect_with_retry(&config).await?;
                if config.database.run_migrations {
                    pool.run_migrations().await?;
                }
                let repository: Arc<dyn UserRepository> =
                    Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
                (repository, Some(pool))
            }
        };

        let user_service = Arc::new(UserServiceImpl::new(repository));
        let router = create_router(AppState::new(user_service), &config.server);

        Ok(App {
            config,
            router,
            pool,
        })
    }
}

async fn connect_with_retry(config: &AppConfig) -> RosterResult<Arc<DatabasePool>> {
    retry_retriable(CONNECT_ATTEMPTS, CONNECT_RETRY_DELAY, || {
        create_pool(&config.database)
    })
    .await
}

/// Runs `op` up to `attempts` times, sleeping `delay` between tries, for as
/// long as it fails with a retriable error.
async fn retry_retriable<T, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> RosterResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = RosterResult<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retriable() && attempt < attempts => {
                warn!(
                    "Database not reachable (attempt {}/{}): {}",
                    attempt, attempts, err
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
