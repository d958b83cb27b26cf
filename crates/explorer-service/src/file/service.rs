//! File record CRUD and listing operations.

use std::sync::Arc;

use tracing::{info, warn};

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId, SortOption};
use explorer_database::FileStore;
use explorer_entity::file::{CreateFile, File, UpdateFile};

use crate::context::RequestContext;

/// Manages file record operations.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<dyn FileStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(file_repo: Arc<dyn FileStore>) -> Self {
        Self { file_repo }
    }

    /// Creates a file record. The target folder must exist.
    pub async fn create_file(&self, ctx: &RequestContext, data: CreateFile) -> AppResult<File> {
        let result = ctx.run(self.file_repo.create(&data)).await;

        match &result {
            Ok(file) => info!(
                request_id = %ctx.request_id,
                file_id = %file.id,
                folder_id = %file.folder_id,
                name = %file.name,
                size = file.size,
                "File created"
            ),
            Err(e) => log_failure(ctx, "create_file", e),
        }

        result
    }

    /// Gets a file record by ID.
    pub async fn get_file_by_id(&self, ctx: &RequestContext, id: FileId) -> AppResult<File> {
        ctx.run(self.file_repo.find_by_id(id))
            .await
            .inspect_err(|e| log_failure(ctx, "get_file_by_id", e))
    }

    /// Lists the files of a folder.
    pub async fn get_files_by_folder_id(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> AppResult<Vec<File>> {
        ctx.run(self.file_repo.find_by_folder(folder_id))
            .await
            .inspect_err(|e| log_failure(ctx, "get_files_by_folder_id", e))
    }

    /// Lists the files of a folder in the given order.
    pub async fn get_files_by_folder_id_sorted(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
        sort: SortOption,
    ) -> AppResult<Vec<File>> {
        ctx.run(self.file_repo.find_by_folder_sorted(folder_id, &sort))
            .await
            .inspect_err(|e| log_failure(ctx, "get_files_by_folder_id_sorted", e))
    }

    /// Renames and/or moves a file record.
    pub async fn update_file(&self, ctx: &RequestContext, changes: UpdateFile) -> AppResult<()> {
        let result = ctx.run(self.file_repo.update(&changes)).await;

        match &result {
            Ok(()) => info!(
                request_id = %ctx.request_id,
                file_id = %changes.id,
                folder_id = %changes.folder_id,
                name = %changes.name,
                "File updated"
            ),
            Err(e) => log_failure(ctx, "update_file", e),
        }

        result
    }

    /// Deletes a file record. Deleting a record that does not exist succeeds.
    pub async fn delete_file(&self, ctx: &RequestContext, id: FileId) -> AppResult<()> {
        let deleted = ctx
            .run(self.file_repo.delete(id))
            .await
            .inspect_err(|e| log_failure(ctx, "delete_file", e))?;

        info!(request_id = %ctx.request_id, file_id = %id, deleted, "File deleted");
        Ok(())
    }
}

fn log_failure(ctx: &RequestContext, operation: &str, error: &AppError) {
    if error.is_not_found() {
        info!(request_id = %ctx.request_id, operation, error = %error, "File not found");
    } else {
        warn!(request_id = %ctx.request_id, operation, error = %error, "File operation failed");
    }
}
