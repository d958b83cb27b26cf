//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

use super::FolderStore;
use crate::error::{is_foreign_key_violation, storage_error};

/// Repository for folder CRUD queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let folder = sqlx::query_as::<_, Folder>(
            "INSERT INTO folder (name, parent_id, owner_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(&data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create folder", e))?;

        debug!(folder_id = %folder.id, parent_id = ?folder.parent_id, "Inserted folder");
        Ok(folder)
    }

    async fn find_by_id(&self, id: FolderId) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folder WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find folder", e))?
            .ok_or_else(|| AppError::resource_not_found("Folder", id))
    }

    async fn find_by_parent(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>> {
        let query = match parent_id {
            Some(parent_id) => {
                sqlx::query_as::<_, Folder>("SELECT * FROM folder WHERE parent_id = $1")
                    .bind(parent_id)
            }
            None => sqlx::query_as::<_, Folder>("SELECT * FROM folder WHERE parent_id IS NULL"),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list child folders", e))
    }

    async fn update(&self, changes: &UpdateFolder) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE folder SET name = $2, parent_id = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(changes.id)
        .bind(&changes.name)
        .bind(changes.parent_id)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to update folder", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("Folder", changes.id));
        }

        debug!(folder_id = %changes.id, parent_id = ?changes.parent_id, "Updated folder");
        Ok(())
    }

    async fn delete(&self, id: FolderId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folder WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Folder {id} still contains folders or files"),
                        e,
                    )
                } else {
                    storage_error("Failed to delete folder", e)
                }
            })?;

        debug!(folder_id = %id, rows = result.rows_affected(), "Deleted folder");
        Ok(result.rows_affected() > 0)
    }
}
