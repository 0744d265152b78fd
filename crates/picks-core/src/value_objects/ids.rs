//! Typed integer identifiers
//!
//! Every row in the store is keyed by a `BIGSERIAL`. Wrapping the raw `i64`
//! in a newtype per entity keeps a comment id from being passed where a pick
//! id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from a path segment or header
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
    #[error("id must be positive")]
    NotPositive,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store id
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse from string representation; ids are always positive
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let raw = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| IdParseError::InvalidFormat)?;
                if raw <= 0 {
                    return Err(IdParseError::NotPositive);
                }
                Ok(Self(raw))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(
    /// Identifier of a pick
    PickId
);
define_id!(
    /// Identifier of a comment
    CommentId
);
define_id!(
    /// Identifier of a user (resolved caller identity or content owner)
    UserId
);
