//! File service.

pub mod service;

pub use service::FileService;
