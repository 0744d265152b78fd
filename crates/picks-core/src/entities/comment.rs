//! Comment entity - flat, one level under a pick

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{CommentId, PickId, UserId};

/// Minimum comment body length in characters
pub const MIN_BODY_CHARS: usize = 1;
/// Maximum comment body length in characters
pub const MAX_BODY_CHARS: usize = 1000;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub pick_id: PickId,
    pub owner_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Check a body against the 1..=1000 character bound
    ///
    /// Length is counted in characters, so multi-byte text is not penalised.
    pub fn validate_body(body: &str) -> Result<(), DomainError> {
        let len = body.chars().count();
        if len < MIN_BODY_CHARS {
            return Err(DomainError::ValidationError(
                "comment body must not be empty".to_string(),
            ));
        }
        if len > MAX_BODY_CHARS {
            return Err(DomainError::ContentTooLong {
                field: "body",
                max: MAX_BODY_CHARS,
            });
        }
        Ok(())
    }
}

/// Values for a comment that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub pick_id: PickId,
    pub owner_id: UserId,
    pub body: String,
}

impl NewComment {
    pub fn new(pick_id: PickId, owner_id: UserId, body: String) -> Result<Self, DomainError> {
        Comment::validate_body(&body)?;
        Ok(Self {
            pick_id,
            owner_id,
            body,
        })
    }
}
