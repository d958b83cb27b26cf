//! Core type definitions used across the explorer workspace.

pub mod id;
pub mod sorting;

pub use id::{FileId, FolderId};
pub use sorting::{SortDirection, SortField, SortOption};
