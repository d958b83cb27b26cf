//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Identifier of a newly created row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse<I> {
    /// Store-generated ID.
    pub id: I,
}

/// Acknowledgement of an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedResponse {
    /// Always `true` on success.
    pub updated: bool,
}

/// Acknowledgement of a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Always `true` on success.
    pub deleted: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub database: String,
}
