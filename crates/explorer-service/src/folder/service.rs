//! Folder CRUD operations.

use std::sync::Arc;

use tracing::{info, warn};

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_database::FolderStore;
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

use crate::context::RequestContext;

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<dyn FolderStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<dyn FolderStore>) -> Self {
        Self { folder_repo }
    }

    /// Creates a folder and returns it with its generated ID and timestamps.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        data: CreateFolder,
    ) -> AppResult<Folder> {
        let result = ctx.run(self.folder_repo.create(&data)).await;

        match &result {
            Ok(folder) => info!(
                request_id = %ctx.request_id,
                folder_id = %folder.id,
                parent_id = ?folder.parent_id,
                name = %folder.name,
                "Folder created"
            ),
            Err(e) => log_failure(ctx, "create_folder", e),
        }

        result
    }

    /// Gets a folder by ID.
    pub async fn get_folder_by_id(&self, ctx: &RequestContext, id: FolderId) -> AppResult<Folder> {
        ctx.run(self.folder_repo.find_by_id(id))
            .await
            .inspect_err(|e| log_failure(ctx, "get_folder_by_id", e))
    }

    /// Lists the direct children of `parent_id`, or the root folders.
    pub async fn get_folders_by_parent_id(
        &self,
        ctx: &RequestContext,
        parent_id: Option<FolderId>,
    ) -> AppResult<Vec<Folder>> {
        ctx.run(self.folder_repo.find_by_parent(parent_id))
            .await
            .inspect_err(|e| log_failure(ctx, "get_folders_by_parent_id", e))
    }

    /// Renames and/or moves a folder.
    pub async fn update_folder(&self, ctx: &RequestContext, changes: UpdateFolder) -> AppResult<()> {
        let result = ctx.run(self.folder_repo.update(&changes)).await;

        match &result {
            Ok(()) => info!(
                request_id = %ctx.request_id,
                folder_id = %changes.id,
                parent_id = ?changes.parent_id,
                name = %changes.name,
                "Folder updated"
            ),
            Err(e) => log_failure(ctx, "update_folder", e),
        }

        result
    }

    /// Deletes a folder. Deleting a folder that does not exist succeeds.
    pub async fn delete_folder(&self, ctx: &RequestContext, id: FolderId) -> AppResult<()> {
        let deleted = ctx
            .run(self.folder_repo.delete(id))
            .await
            .inspect_err(|e| log_failure(ctx, "delete_folder", e))?;

        info!(request_id = %ctx.request_id, folder_id = %id, deleted, "Folder deleted");
        Ok(())
    }
}

fn log_failure(ctx: &RequestContext, operation: &str, error: &AppError) {
    if error.is_not_found() {
        info!(request_id = %ctx.request_id, operation, error = %error, "Folder not found");
    } else {
        warn!(request_id = %ctx.request_id, operation, error = %error, "Folder operation failed");
    }
}
