//! Sorting types for file listings.
//!
//! A [`SortOption`] is the only user-influenced text that ends up inside an
//! SQL statement (the `ORDER BY` clause). It can only be built from the
//! allow-lists below, so the rendered clause never contains caller text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(AppError::validation(format!("Invalid sort order '{s}'"))),
        }
    }
}

/// Columns a file listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Primary key.
    Id,
    /// File name.
    Name,
    /// File size in bytes.
    Size,
    /// Creation timestamp.
    CreatedAt,
    /// Last update timestamp.
    UpdatedAt,
}

impl SortField {
    /// Every accepted field, in declaration order.
    pub const ALL: [SortField; 5] = [
        Self::Id,
        Self::Name,
        Self::Size,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Return the column name for this field.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Size => "size",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_column() == s)
            .ok_or_else(|| AppError::validation(format!("Invalid sort field '{s}'")))
    }
}

/// A validated sort specification consisting of a field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    /// Column to sort by.
    pub field: SortField,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortOption {
    /// Validate raw caller input into a sort option.
    ///
    /// Fails with a validation error when `field` is not one of
    /// `id`, `name`, `size`, `created_at`, `updated_at`, or when `order` is
    /// not `ASC`/`DESC`.
    pub fn new(field: &str, order: &str) -> Result<Self, AppError> {
        Ok(Self {
            field: field.parse()?,
            direction: order.parse()?,
        })
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Render the body of the `ORDER BY` clause, e.g. `name DESC`.
    pub fn order_by_clause(&self) -> String {
        format!("{} {}", self.field.as_column(), self.direction.as_sql())
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.order_by_clause())
    }
}
