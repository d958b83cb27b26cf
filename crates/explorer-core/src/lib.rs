//! # explorer-core
//!
//! Core crate for the folder/file explorer. Contains configuration schemas,
//! typed identifiers, the validated sort specification, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other explorer crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
