//! PostgreSQL connection pool management.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{info, warn};

use explorer_core::config::DatabaseConfig;
use explorer_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx PostgreSQL connection pool.
///
/// Created once at process start, cloned into every repository and closed
/// once at shutdown.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Connect to the database, retrying a fixed number of times.
    ///
    /// Makes `connect_attempts` attempts spaced `connect_retry_delay_seconds`
    /// apart, each bounded by `connect_timeout_seconds`. The error of the
    /// last attempt is returned once the attempts are exhausted.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            user = %config.user,
            max_connections = config.max_connections,
            attempts = config.connect_attempts,
            "Connecting to PostgreSQL"
        );

        let options = connect_options(config);
        let delay = Duration::from_secs(config.connect_retry_delay_seconds);

        let pool = retry_with_fixed_delay(config.connect_attempts, delay, |_| {
            pool_options(config).connect_with(options.clone())
        })
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!(
                    "Failed to connect to database after {} attempts: {e}",
                    config.connect_attempts.max(1)
                ),
                e,
            )
        })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Build a pool that opens connections on first use.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        Self {
            pool: pool_options(config).connect_lazy_with(connect_options(config)),
        }
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// Run `op` until it succeeds or `attempts` tries have failed, sleeping
/// `delay` between tries. `op` receives the 1-based attempt number.
pub async fn retry_with_fixed_delay<T, E, F, Fut>(
    attempts: u32,
    delay: Duration,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                warn!(
                    attempt,
                    attempts,
                    retry_in_seconds = delay.as_secs(),
                    error = %e,
                    "Connection attempt failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
