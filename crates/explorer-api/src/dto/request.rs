//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use explorer_core::types::{FileId, FolderId};
use explorer_entity::file::{CreateFile, UpdateFile};
use explorer_entity::folder::{CreateFolder, UpdateFolder};

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Folder name must be 1-255 characters"))]
    pub name: String,
    /// Opaque owner identifier.
    #[serde(default)]
    pub owner_id: String,
    /// Parent folder (omitted or null for a root folder).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

impl From<CreateFolderRequest> for CreateFolder {
    fn from(req: CreateFolderRequest) -> Self {
        Self {
            owner_id: req.owner_id,
            name: req.name,
            parent_id: req.parent_id,
        }
    }
}

/// Update folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFolderRequest {
    /// The folder to update.
    pub id: FolderId,
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Folder name must be 1-255 characters"))]
    pub name: String,
    /// New parent (omitted or null moves the folder to the root).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

impl From<UpdateFolderRequest> for UpdateFolder {
    fn from(req: UpdateFolderRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            parent_id: req.parent_id,
        }
    }
}

/// Create file request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileRequest {
    /// File name.
    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub name: String,
    /// Opaque owner identifier.
    #[serde(default)]
    pub owner_id: String,
    /// Containing folder.
    pub folder_id: FolderId,
    /// Opaque storage location of the content.
    #[serde(default)]
    pub object_path: String,
    /// Size in bytes.
    #[validate(range(min = 0, message = "File size must not be negative"))]
    #[serde(default)]
    pub size: i64,
    /// MIME-like content type.
    #[serde(rename = "type", default)]
    pub file_type: String,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreateFileRequest> for CreateFile {
    fn from(req: CreateFileRequest) -> Self {
        Self {
            owner_id: req.owner_id,
            name: req.name,
            folder_id: req.folder_id,
            object_path: req.object_path,
            size: req.size,
            file_type: req.file_type,
            tags: req.tags,
        }
    }
}

/// Update file request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFileRequest {
    /// The file to update.
    pub id: FileId,
    /// New name.
    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub name: String,
    /// New containing folder.
    pub folder_id: FolderId,
}

impl From<UpdateFileRequest> for UpdateFile {
    fn from(req: UpdateFileRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            folder_id: req.folder_id,
        }
    }
}

/// Query parameters for `GET /api/folders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFoldersQuery {
    /// Parent folder; root folders are listed when absent.
    pub parent_id: Option<String>,
}

/// Query parameters for `GET /api/files`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilesQuery {
    /// Containing folder.
    pub folder_id: Option<String>,
    /// Sort field (`id`, `name`, `size`, `created_at`, `updated_at`).
    pub sort: Option<String>,
    /// Sort order (`ASC` or `DESC`, default `ASC`).
    pub order: Option<String>,
}
