//! File repository implementation.
//!
//! `object_path` and `type` are nullable columns and `tags` is a JSONB
//! array; [`FileRow`] is the storage shape and is converted into the
//! [`File`] entity on every read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId, SortOption};
use explorer_entity::file::{CreateFile, File, UpdateFile};

use super::FileStore;
use crate::error::storage_error;

/// A `file` row as stored.
#[derive(Debug, FromRow)]
struct FileRow {
    id: FileId,
    owner_id: String,
    name: String,
    folder_id: FolderId,
    object_path: Option<String>,
    size: i64,
    #[sqlx(rename = "type")]
    file_type: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Option<Json<Vec<Option<String>>>>,
}

impl From<FileRow> for File {
    fn from(row: FileRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            folder_id: row.folder_id,
            object_path: row.object_path.unwrap_or_default(),
            size: row.size,
            file_type: row.file_type.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            tags: row
                .tags
                .map(|Json(tags)| tags.into_iter().flatten().collect())
                .unwrap_or_default(),
        }
    }
}

/// Repository for file CRUD and listing queries.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        let row = sqlx::query_as::<_, FileRow>(
            "INSERT INTO file (name, folder_id, owner_id, size, type, object_path, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.folder_id)
        .bind(&data.owner_id)
        .bind(data.size)
        .bind(&data.file_type)
        .bind(&data.object_path)
        .bind(Json(&data.tags))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to create file", e))?;

        debug!(file_id = %row.id, folder_id = %row.folder_id, "Inserted file");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<File> {
        sqlx::query_as::<_, FileRow>("SELECT * FROM file WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find file", e))?
            .map(File::from)
            .ok_or_else(|| AppError::resource_not_found("File", id))
    }

    async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        let rows = sqlx::query_as::<_, FileRow>("SELECT * FROM file WHERE folder_id = $1")
            .bind(folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list files", e))?;

        Ok(rows.into_iter().map(File::from).collect())
    }

    async fn find_by_folder_sorted(
        &self,
        folder_id: FolderId,
        sort: &SortOption,
    ) -> AppResult<Vec<File>> {
        // The ORDER BY body comes from the SortOption allow-lists only.
        let sql = format!(
            "SELECT * FROM file WHERE folder_id = $1 ORDER BY {}",
            sort.order_by_clause()
        );

        let rows = sqlx::query_as::<_, FileRow>(&sql)
            .bind(folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list sorted files", e))?;

        Ok(rows.into_iter().map(File::from).collect())
    }

    async fn update(&self, changes: &UpdateFile) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE file SET name = $2, folder_id = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(changes.id)
        .bind(&changes.name)
        .bind(changes.folder_id)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to update file", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::resource_not_found("File", changes.id));
        }

        debug!(file_id = %changes.id, folder_id = %changes.folder_id, "Updated file");
        Ok(())
    }

    async fn delete(&self, id: FileId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM file WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete file", e))?;

        debug!(file_id = %id, rows = result.rows_affected(), "Deleted file");
        Ok(result.rows_affected() > 0)
    }
}
