//! Comment thread service
//!
//! Builds a pick's flat comment list, oldest first with ties broken by id,
//! each comment carrying its own aggregate and author.

use picks_core::{CommentId, DomainError, PickId, UserId};
use tracing::instrument;

use crate::dto::{AuthorResponse, CommentResponse};

use super::aggregate::AggregateService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Thread of an existing pick
    #[instrument(skip(self))]
    pub async fn thread(
        &self,
        pick_id: PickId,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        if self.ctx.pick_repo().find_by_id(pick_id).await?.is_none() {
            return Err(DomainError::PickNotFound(pick_id).into());
        }
        self.assemble(pick_id, viewer).await
    }

    /// Thread without the existence check; an unknown pick yields nothing
    #[instrument(skip(self))]
    pub async fn assemble(
        &self,
        pick_id: PickId,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let mut comments = self.ctx.comment_repo().find_by_pick(pick_id).await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }
        // Total order regardless of what the store returned
        comments.sort_by_key(|c| (c.created_at, c.id));

        let ids: Vec<CommentId> = comments.iter().map(|c| c.id).collect();
        let owners: Vec<UserId> = comments.iter().map(|c| c.owner_id).collect();

        let aggregator = AggregateService::new(self.ctx);
        let (mut aggregates, authors) = tokio::try_join!(
            aggregator.for_comments(&ids, viewer),
            aggregator.authors(&owners),
        )?;

        Ok(comments
            .into_iter()
            .map(|comment| {
                let aggregate = aggregates.remove(&comment.id).unwrap_or_default();
                let author = authors
                    .get(&comment.owner_id)
                    .cloned()
                    .unwrap_or_else(|| AuthorResponse::unknown(comment.owner_id));
                CommentResponse::assemble(comment, author, aggregate)
            })
            .collect())
    }
}
