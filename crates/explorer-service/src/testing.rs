//! In-memory store for service and transport tests.
//!
//! [`MemoryStore`] implements both [`FolderStore`] and [`FileStore`] and
//! enforces the same referential rules as the PostgreSQL schema: a parent
//! folder must exist, a file's folder must exist, and a folder that is still
//! referenced by folders or files cannot be deleted.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId, SortDirection, SortField, SortOption};
use explorer_database::{FileStore, FolderStore};
use explorer_entity::file::{CreateFile, File, UpdateFile};
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

#[derive(Debug, Default)]
struct Tables {
    folders: BTreeMap<FolderId, Folder>,
    files: BTreeMap<FileId, File>,
    next_folder_id: i64,
    next_file_id: i64,
}

impl Tables {
    fn require_folder(&self, id: FolderId, constraint: &str) -> AppResult<()> {
        if self.folders.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::storage(format!(
                "insert or update violates foreign key constraint \"{constraint}\": \
                 Key ({id}) is not present in table \"folder\""
            )))
        }
    }
}

/// Shared in-memory folder and file tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut tables = self.tables.lock().await;
        if data.name.is_empty() {
            return Err(AppError::storage("Folder name must not be empty"));
        }
        if let Some(parent_id) = data.parent_id {
            tables.require_folder(parent_id, "fk_folder_parent_id")?;
        }

        tables.next_folder_id += 1;
        let now = Utc::now();
        let folder = Folder {
            id: FolderId(tables.next_folder_id),
            owner_id: data.owner_id.clone(),
            name: data.name.clone(),
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        };
        tables.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn find_by_id(&self, id: FolderId) -> AppResult<Folder> {
        self.tables
            .lock()
            .await
            .folders
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::resource_not_found("Folder", id))
    }

    async fn find_by_parent(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>> {
        Ok(self
            .tables
            .lock()
            .await
            .folders
            .values()
            .filter(|folder| folder.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn update(&self, changes: &UpdateFolder) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        if !tables.folders.contains_key(&changes.id) {
            return Err(AppError::resource_not_found("Folder", changes.id));
        }
        if changes.name.is_empty() {
            return Err(AppError::storage("Folder name must not be empty"));
        }
        if let Some(parent_id) = changes.parent_id {
            tables.require_folder(parent_id, "fk_folder_parent_id")?;
        }

        if let Some(folder) = tables.folders.get_mut(&changes.id) {
            folder.name = changes.name.clone();
            folder.parent_id = changes.parent_id;
            folder.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: FolderId) -> AppResult<bool> {
        let mut tables = self.tables.lock().await;
        let referenced = tables.folders.values().any(|f| f.parent_id == Some(id))
            || tables.files.values().any(|f| f.folder_id == id);
        if referenced {
            return Err(AppError::storage(format!(
                "Folder {id} still contains folders or files"
            )));
        }
        Ok(tables.folders.remove(&id).is_some())
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn create(&self, data: &CreateFile) -> AppResult<File> {
        let mut tables = self.tables.lock().await;
        tables.require_folder(data.folder_id, "fk_file_folder_id")?;
        if data.name.is_empty() {
            return Err(AppError::storage("File name must not be empty"));
        }
        if data.size < 0 {
            return Err(AppError::storage("File size must not be negative"));
        }

        tables.next_file_id += 1;
        let now = Utc::now();
        let file = File {
            id: FileId(tables.next_file_id),
            owner_id: data.owner_id.clone(),
            name: data.name.clone(),
            folder_id: data.folder_id,
            object_path: data.object_path.clone(),
            size: data.size,
            file_type: data.file_type.clone(),
            created_at: now,
            updated_at: now,
            tags: data.tags.clone(),
        };
        tables.files.insert(file.id, file.clone());
        Ok(file)
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<File> {
        self.tables
            .lock()
            .await
            .files
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::resource_not_found("File", id))
    }

    async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        Ok(self
            .tables
            .lock()
            .await
            .files
            .values()
            .filter(|file| file.folder_id == folder_id)
            .cloned()
            .collect())
    }

    async fn find_by_folder_sorted(
        &self,
        folder_id: FolderId,
        sort: &SortOption,
    ) -> AppResult<Vec<File>> {
        let mut files = FileStore::find_by_folder(self, folder_id).await?;
        files.sort_by(|a, b| {
            let ordering = compare(a, b, sort.field);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        Ok(files)
    }

    async fn update(&self, changes: &UpdateFile) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        if !tables.files.contains_key(&changes.id) {
            return Err(AppError::resource_not_found("File", changes.id));
        }
        if changes.name.is_empty() {
            return Err(AppError::storage("File name must not be empty"));
        }
        tables.require_folder(changes.folder_id, "fk_file_folder_id")?;

        if let Some(file) = tables.files.get_mut(&changes.id) {
            file.name = changes.name.clone();
            file.folder_id = changes.folder_id;
            file.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: FileId) -> AppResult<bool> {
        Ok(self.tables.lock().await.files.remove(&id).is_some())
    }
}

fn compare(a: &File, b: &File, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Size => a.size.cmp(&b.size),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}
