//! Shared helpers for mapping rows to domain values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

pub(super) fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", column, e),
        )
    })
}

pub(super) fn user_id(row: &PgRow) -> Result<UserId, DomainError> {
    let raw: String = get(row, "user_id")?;
    UserId::new(raw).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
    })
}

pub(super) fn from_json<T: DeserializeOwned>(
    row: &PgRow,
    column: &str,
) -> Result<T, DomainError> {
    let value: serde_json::Value = get(row, column)?;
    serde_json::from_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to decode {}: {}", column, e),
        )
    })
}

pub(super) fn to_json<T: Serialize>(value: &T, column: &str) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to encode {}: {}", column, e),
        )
    })
}

/// Converts a stored non-negative integer into a domain counter.
pub(super) fn counter<T: TryFrom<i64>>(value: i64, column: &str) -> Result<T, DomainError> {
    T::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Column {} out of range: {}", column, value),
        )
    })
}
