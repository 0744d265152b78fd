//! Reaction entity and the derived aggregate view

use chrono::{DateTime, Utc};

use crate::value_objects::{Polarity, TargetRef, ToggleAction, UserId};

/// One user's sentiment toward one target
///
/// Keyed by (user, target); at most one exists per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub target: TargetRef,
    pub user_id: UserId,
    pub polarity: Polarity,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(target: TargetRef, user_id: UserId, polarity: Polarity) -> Self {
        Self {
            target,
            user_id,
            polarity,
            created_at: Utc::now(),
        }
    }
}

/// Like/dislike counts for one target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionTally {
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionTally {
    pub const fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }

    /// Number of reaction rows behind this tally
    #[inline]
    pub const fn total(&self) -> i64 {
        self.likes + self.dislikes
    }
}

/// Result of a toggle: what happened plus fresh counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub action: ToggleAction,
    pub tally: ReactionTally,
}

/// Derived, per-response view of a target's reactions
///
/// Never stored; rebuilt from the reaction set on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub tally: ReactionTally,
    /// Comment count, only meaningful for picks
    pub comments: Option<i64>,
    /// The viewer's own polarity; `None` when anonymous or not reacted
    pub viewer: Option<Polarity>,
}

impl Aggregate {
    #[inline]
    pub const fn likes(&self) -> i64 {
        self.tally.likes
    }

    #[inline]
    pub const fn dislikes(&self) -> i64 {
        self.tally.dislikes
    }
}
