//! Custom Axum extractors.

pub mod context;
pub mod path;

pub use context::RequestCtx;
