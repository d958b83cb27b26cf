//! Translation of sqlx failures into [`AppError`].
//!
//! Every failure reported by PostgreSQL becomes an [`ErrorKind::Storage`]
//! error whose message carries the server's message, detail, context and
//! SQLSTATE code. The original `sqlx::Error` is kept as the source.

use std::fmt::Write;

use sqlx::postgres::PgDatabaseError;

use explorer_core::error::{AppError, ErrorKind};

/// SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Wrap a sqlx error as a storage error, prefixed with what was attempted.
pub fn storage_error(context: &str, err: sqlx::Error) -> AppError {
    let message = format!("{context}: {}", describe(&err));
    AppError::with_source(ErrorKind::Storage, message, err)
}

/// Whether the error is a foreign-key constraint violation.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sql_state(err).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

/// The SQLSTATE code of a database error, if the server reported one.
pub fn sql_state(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

fn describe(err: &sqlx::Error) -> String {
    let sqlx::Error::Database(db_err) = err else {
        return err.to_string();
    };

    let Some(pg) = db_err.try_downcast_ref::<PgDatabaseError>() else {
        return format!("SQL error: {}", db_err.message());
    };

    let mut out = format!("SQL error: {}", pg.message());
    if let Some(detail) = pg.detail() {
        let _ = write!(out, ", Details: {detail}");
    }
    if let Some(context) = pg.r#where() {
        let _ = write!(out, ", Where: {context}");
    }
    let _ = write!(out, ", Code: {}", pg.code());
    out
}
