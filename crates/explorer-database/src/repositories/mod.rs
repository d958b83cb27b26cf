//! Repository traits and their PostgreSQL implementations.

pub mod file;
pub mod folder;

use std::fmt::Debug;

use async_trait::async_trait;

use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId, SortOption};
use explorer_entity::file::{CreateFile, File, UpdateFile};
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

pub use file::FileRepository;
pub use folder::FolderRepository;

/// Persistence operations for folders.
///
/// Implementations must be safe to share across concurrently running
/// requests. Referential rules (a parent must exist, a folder with children
/// cannot be deleted) are enforced by the store and reported as
/// storage errors.
#[async_trait]
pub trait FolderStore: Debug + Send + Sync + 'static {
    /// Insert a folder and return it with its generated ID and timestamps.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Find a folder by ID. Fails with a not-found error when absent.
    async fn find_by_id(&self, id: FolderId) -> AppResult<Folder>;

    /// List the direct children of `parent_id`, or the root folders when
    /// `parent_id` is `None`.
    async fn find_by_parent(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>>;

    /// Rename and/or re-parent a folder. Fails with a not-found error when
    /// no folder has the given ID.
    async fn update(&self, changes: &UpdateFolder) -> AppResult<()>;

    /// Delete a folder. Returns `false` when there was nothing to delete.
    async fn delete(&self, id: FolderId) -> AppResult<bool>;
}

/// Persistence operations for file records.
#[async_trait]
pub trait FileStore: Debug + Send + Sync + 'static {
    /// Insert a file record and return it with its generated ID and timestamps.
    async fn create(&self, data: &CreateFile) -> AppResult<File>;

    /// Find a file by ID. Fails with a not-found error when absent.
    async fn find_by_id(&self, id: FileId) -> AppResult<File>;

    /// List the files of a folder in the store's natural order.
    async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<File>>;

    /// List the files of a folder ordered by a validated sort option.
    async fn find_by_folder_sorted(
        &self,
        folder_id: FolderId,
        sort: &SortOption,
    ) -> AppResult<Vec<File>>;

    /// Rename and/or move a file. Fails with a not-found error when no file
    /// has the given ID.
    async fn update(&self, changes: &UpdateFile) -> AppResult<()>;

    /// Delete a file record. Returns `false` when there was nothing to delete.
    async fn delete(&self, id: FileId) -> AppResult<bool>;
}
