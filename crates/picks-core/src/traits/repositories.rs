//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every mutating operation is one
//! all-or-nothing unit in the backing store.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{
    Comment, NewComment, NewPick, Pick, Reaction, ReactionTally, ToggleResult, User,
};
use crate::error::DomainError;
use crate::value_objects::{CommentId, PickId, Polarity, TargetKind, TargetRef, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find many users in one round trip; unknown ids are skipped
    async fn find_many(&self, ids: &[UserId]) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Pick Repository
// ============================================================================

/// Pagination options for pick listings (newest first)
#[derive(Debug, Clone)]
pub struct PickQuery {
    /// Only picks strictly older than this one
    pub before: Option<PickId>,
    pub limit: i64,
}

impl Default for PickQuery {
    fn default() -> Self {
        Self {
            before: None,
            limit: 50,
        }
    }
}

#[async_trait]
pub trait PickRepository: Send + Sync {
    /// Find pick by ID
    async fn find_by_id(&self, id: PickId) -> RepoResult<Option<Pick>>;

    /// List picks ordered by (created_at DESC, id DESC)
    async fn list_recent(&self, query: PickQuery) -> RepoResult<Vec<Pick>>;

    /// Store a new pick and return it with its assigned id
    async fn create(&self, pick: &NewPick) -> RepoResult<Pick>;

    /// Persist title/link/updated_at of an existing pick
    async fn update(&self, pick: &Pick) -> RepoResult<()>;

    /// Delete a pick, its comments and every reaction on either, atomically
    ///
    /// Returns `false` when the pick did not exist.
    async fn delete_cascade(&self, id: PickId) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// All comments of a pick, ordered by (created_at ASC, id ASC)
    async fn find_by_pick(&self, pick_id: PickId) -> RepoResult<Vec<Comment>>;

    /// Store a new comment
    ///
    /// Fails with `PickNotFound` when the parent is absent at insert time.
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Replace the body of an existing comment
    async fn update_body(&self, id: CommentId, body: &str) -> RepoResult<Comment>;

    /// Delete a comment and its reactions atomically
    ///
    /// Returns `false` when the comment did not exist.
    async fn delete(&self, id: CommentId) -> RepoResult<bool>;

    /// Comment counts for many picks in one grouped pass
    async fn count_by_picks(&self, pick_ids: &[PickId]) -> RepoResult<HashMap<PickId, i64>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Run one toggle for (target, user) as a single transaction
    ///
    /// Fails with the matching not-found error when the target is absent.
    async fn toggle(
        &self,
        target: TargetRef,
        user_id: UserId,
        polarity: Polarity,
    ) -> RepoResult<ToggleResult>;

    /// The reaction a user holds on a target, if any
    async fn find(&self, target: TargetRef, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// Grouped like/dislike counts for many targets of one kind
    ///
    /// Targets without reactions are absent from the map.
    async fn tally_many(
        &self,
        kind: TargetKind,
        target_ids: &[i64],
    ) -> RepoResult<HashMap<i64, ReactionTally>>;

    /// The user's own polarity on each of the given targets
    async fn find_polarities(
        &self,
        kind: TargetKind,
        target_ids: &[i64],
        user_id: UserId,
    ) -> RepoResult<HashMap<i64, Polarity>>;

    /// Counts for a single target
    async fn tally(&self, target: TargetRef) -> RepoResult<ReactionTally> {
        let id = target.raw_id();
        let mut map = self.tally_many(target.kind(), &[id]).await?;
        Ok(map.remove(&id).unwrap_or_default())
    }
}
