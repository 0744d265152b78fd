//! Reaction service
//!
//! Runs the like/dislike toggle for one (user, target) pair. The
//! transition and the fresh counts come back from a single store
//! transaction, so no second read is needed.

use picks_core::{TargetRef, UserId};
use tracing::{info, instrument};

use crate::dto::{ReactRequest, ReactionToggleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the caller's reaction on a pick or comment
    ///
    /// The polarity is checked before the store is touched.
    #[instrument(skip(self, request), fields(target_kind = %target.kind(), target_id = target.raw_id()))]
    pub async fn toggle(
        &self,
        user_id: UserId,
        target: TargetRef,
        request: &ReactRequest,
    ) -> ServiceResult<ReactionToggleResponse> {
        let polarity = request.polarity()?;

        let result = self
            .ctx
            .reaction_repo()
            .toggle(target, user_id, polarity)
            .await?;

        info!(
            target_kind = %target.kind(),
            target_id = target.raw_id(),
            user_id = %user_id,
            action = result.action.as_str(),
            likes = result.tally.likes,
            dislikes = result.tally.dislikes,
            "Reaction toggled"
        );

        Ok(result.into())
    }
}
