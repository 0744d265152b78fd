//! Error handling utilities for repositories
//!
//! Every sqlx failure is classified here and nowhere else.

use picks_core::error::DomainError;
use picks_core::value_objects::{CommentId, PickId};
use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Constraint violations become `Conflict`; everything else (pool timeout,
/// I/O, protocol, aborted transactions) means the store is unavailable.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation => {
                return DomainError::Conflict(db_err.message().to_string());
            }
            _ => {}
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "pick not found" error
pub fn pick_not_found(id: PickId) -> DomainError {
    DomainError::PickNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: CommentId) -> DomainError {
    DomainError::CommentNotFound(id)
}
