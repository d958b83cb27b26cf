//! Convenience result type alias for the explorer.

use crate::error::AppError;

/// A specialized `Result` type for explorer operations.
///
/// Defined so that repositories, services and handlers do not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
