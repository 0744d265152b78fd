//! Reaction targets - the two kinds of content a user can react to

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CommentId, PickId};

/// Kind of a reaction target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Pick,
    Comment,
}

impl TargetKind {
    /// Stored representation (`reactions.target_kind`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pick => "pick",
            Self::Comment => "comment",
        }
    }

    /// Parse the stored representation
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pick" => Some(Self::Pick),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete reaction target: kind plus id
///
/// The reaction and aggregate machinery is written once against this type;
/// only the existence checks branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRef {
    Pick(PickId),
    Comment(CommentId),
}

impl TargetRef {
    #[inline]
    pub const fn kind(self) -> TargetKind {
        match self {
            Self::Pick(_) => TargetKind::Pick,
            Self::Comment(_) => TargetKind::Comment,
        }
    }

    /// Raw id as stored in `reactions.target_id`
    #[inline]
    pub const fn raw_id(self) -> i64 {
        match self {
            Self::Pick(id) => id.into_inner(),
            Self::Comment(id) => id.into_inner(),
        }
    }

    /// Rebuild a target from its stored pair
    pub const fn from_parts(kind: TargetKind, raw_id: i64) -> Self {
        match kind {
            TargetKind::Pick => Self::Pick(PickId::new(raw_id)),
            TargetKind::Comment => Self::Comment(CommentId::new(raw_id)),
        }
    }
}

impl From<PickId> for TargetRef {
    fn from(id: PickId) -> Self {
        Self::Pick(id)
    }
}

impl From<CommentId> for TargetRef {
    fn from(id: CommentId) -> Self {
        Self::Comment(id)
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.raw_id())
    }
}
