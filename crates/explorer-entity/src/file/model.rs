//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use explorer_core::types::{FileId, FolderId};

/// A file record. Only metadata is modeled; the content lives at
/// `object_path`, which is opaque to the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// Opaque owner identifier.
    pub owner_id: String,
    /// The file name (including extension).
    pub name: String,
    /// The folder containing this file.
    pub folder_id: FolderId,
    /// Opaque storage location of the content.
    pub object_path: String,
    /// File size in bytes.
    pub size: i64,
    /// MIME-like content type.
    #[serde(rename = "type")]
    pub file_type: String,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
    /// Ordered tags; empty when the file has none.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFile {
    /// Opaque owner identifier.
    pub owner_id: String,
    /// The file name.
    pub name: String,
    /// The folder to place the file in.
    pub folder_id: FolderId,
    /// Opaque storage location of the content.
    pub object_path: String,
    /// File size in bytes.
    pub size: i64,
    /// MIME-like content type.
    #[serde(rename = "type")]
    pub file_type: String,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The mutable part of a file record: its name and containing folder.
/// Every other column is write-once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFile {
    /// The file to update.
    pub id: FileId,
    /// New name.
    pub name: String,
    /// New containing folder.
    pub folder_id: FolderId,
}
