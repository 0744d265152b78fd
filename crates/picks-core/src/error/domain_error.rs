//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CommentId, PickId, UserId};

/// Failure classes every error is reduced to before leaving the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Unauthenticated,
    Forbidden,
    NotFound,
    Conflict,
    Unavailable,
    Internal,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Unavailable => "unavailable",
            Self::Internal => "internal",
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Pick not found: {0}")]
    PickNotFound(PickId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Image reference is required")]
    MissingImageRef,

    #[error("Invalid polarity: {0}")]
    InvalidPolarity(String),

    #[error("{field} too long: max {max} characters")]
    ContentTooLong { field: &'static str, max: usize },

    // =========================================================================
    // Identity / Authorization Errors
    // =========================================================================
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Not pick owner")]
    NotPickOwner,

    #[error("Not comment owner")]
    NotCommentOwner,

    // =========================================================================
    // Store Errors
    // =========================================================================
    #[error("Constraint violation: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Classify into the shared failure taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PickNotFound(_) | Self::CommentNotFound(_) | Self::UserNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::ValidationError(_)
            | Self::MissingImageRef
            | Self::InvalidPolarity(_)
            | Self::ContentTooLong { .. } => ErrorKind::InvalidArgument,
            Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::NotPickOwner | Self::NotCommentOwner => ErrorKind::Forbidden,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::DatabaseError(_) => ErrorKind::Unavailable,
            Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PickNotFound(_) => "UNKNOWN_PICK",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingImageRef => "MISSING_IMAGE",
            Self::InvalidPolarity(_) => "INVALID_POLARITY",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Identity / Authorization
            Self::Unauthenticated => "UNAUTHORIZED",
            Self::NotPickOwner => "NOT_PICK_OWNER",
            Self::NotCommentOwner => "NOT_COMMENT_OWNER",

            // Store
            Self::Conflict(_) => "CONFLICT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::Forbidden
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}
