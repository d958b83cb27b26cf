//! # explorer-entity
//!
//! Domain entity models for the explorer. Every struct in this crate is
//! either a stored row (`Folder`, `File`) or the payload used to create or
//! modify one. All entities derive `Debug`, `Clone`, `Serialize` and
//! `Deserialize`; rows that map one-to-one onto a table also derive
//! `sqlx::FromRow`.

pub mod file;
pub mod folder;
