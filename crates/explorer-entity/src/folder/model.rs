//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use explorer_core::types::FolderId;

/// A folder in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Opaque owner identifier.
    pub owner_id: String,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Opaque owner identifier.
    pub owner_id: String,
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

/// The mutable part of a folder: its name and its position in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFolder {
    /// The folder to update.
    pub id: FolderId,
    /// New name.
    pub name: String,
    /// New parent (None moves the folder to the root).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
}

impl From<&Folder> for UpdateFolder {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
        }
    }
}
