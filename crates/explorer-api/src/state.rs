//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use explorer_core::config::AppConfig;
use explorer_database::DatabasePool;
use explorer_service::{FileService, FolderService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used by the health check
    pub db: DatabasePool,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// File service
    pub file_service: Arc<FileService>,
    /// Cancelled when in-flight requests must stop during shutdown
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Assembles the state from its parts with a fresh shutdown token.
    pub fn new(
        config: Arc<AppConfig>,
        db: DatabasePool,
        folder_service: Arc<FolderService>,
        file_service: Arc<FileService>,
    ) -> Self {
        Self {
            config,
            db,
            folder_service,
            file_service,
            shutdown: CancellationToken::new(),
        }
    }
}
