//! # explorer-database
//!
//! PostgreSQL connection management and the concrete folder and file
//! repositories. The [`FolderStore`] and [`FileStore`] traits are the seam
//! the service layer depends on.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{FileRepository, FileStore, FolderRepository, FolderStore};
