//! # explorer-service
//!
//! Application service layer for the explorer. Each service delegates to
//! its repository, logs the outcome, and returns the repository's result
//! unchanged. Storage invariants (parent exists, folder empty before delete)
//! live in the database schema, not here.
//!
//! Services follow constructor injection: repositories are provided at
//! construction time as `Arc<dyn ...Store>` trait objects. Every operation
//! takes a [`RequestContext`] that bounds how long it may wait on the store.

pub mod context;
pub mod file;
pub mod folder;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::RequestContext;
pub use file::FileService;
pub use folder::FolderService;
