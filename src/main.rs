//! Explorer Server: REST API over the folder/file metadata store.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use explorer_api::{AppState, build_router};
use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::{DatabasePool, FileRepository, FolderRepository};
use explorer_service::{FileService, FolderService};

#[tokio::main]
async fn main() {
    let env = std::env::var("EXPLORER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting explorer v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        explorer_database::migration::run_migrations(db.pool()).await?;
    } else {
        tracing::info!("Skipping database migrations");
    }

    // ── Step 2: Repositories and services ────────────────────────
    let folder_repo = Arc::new(FolderRepository::new(db.pool().clone()));
    let file_repo = Arc::new(FileRepository::new(db.pool().clone()));

    let folder_service = Arc::new(FolderService::new(folder_repo));
    let file_service = Arc::new(FileService::new(file_repo));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let config = Arc::new(config);
    let state = AppState::new(Arc::clone(&config), db.clone(), folder_service, file_service);
    let shutdown = state.shutdown.clone();
    let app = build_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Explorer server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!(
            grace_seconds = grace.as_secs(),
            "Shutdown signal received, draining in-flight requests"
        );
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            tracing::warn!("Shutdown grace period elapsed, cancelling in-flight requests");
            shutdown.cancel();
        });
    });

    let result = server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    db.close().await;
    tracing::info!("Explorer server shut down");
    result
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
