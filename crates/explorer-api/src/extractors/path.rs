//! Typed path and query parameter helpers.

use std::str::FromStr;

use explorer_core::error::AppError;

/// Parses an identifier from a path segment or query value.
pub fn parse_id<T: FromStr>(name: &str, s: &str) -> Result<T, AppError> {
    s.parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid {name}: {s}")))
}
