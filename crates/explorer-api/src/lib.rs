//! # explorer-api
//!
//! HTTP API layer for the explorer built on Axum.
//!
//! Provides the folder and file REST endpoints, the health check,
//! middleware (CORS, logging), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
