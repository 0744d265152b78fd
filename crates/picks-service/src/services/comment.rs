//! Comment service
//!
//! Handles comment creation, body edits and deletion.

use picks_core::{Comment, CommentId, DomainError, NewComment, TargetRef, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{AuthorResponse, CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::aggregate::AggregateService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ownership::OwnershipService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a pick
    ///
    /// The parent is checked inside the insert, so a pick deleted in the
    /// meantime still yields `PickNotFound`.
    #[instrument(skip(self, request), fields(pick_id = %request.pick_id))]
    pub async fn create(
        &self,
        owner_id: UserId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        let new_comment = NewComment::new(request.pick_id, owner_id, request.body)?;

        let comment = self.ctx.comment_repo().create(&new_comment).await?;

        info!(comment_id = %comment.id, pick_id = %comment.pick_id, "Comment created");

        self.annotate(comment, Some(owner_id)).await
    }

    /// Single comment with stats
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        comment_id: CommentId,
        viewer: Option<UserId>,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.find(comment_id).await?;
        self.annotate(comment, viewer).await
    }

    /// Replace the body; author only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        comment_id: CommentId,
        caller: UserId,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;
        Comment::validate_body(&request.body)?;

        let comment = self.find(comment_id).await?;
        OwnershipService::new(self.ctx).require_owner(
            caller,
            comment.owner_id,
            DomainError::NotCommentOwner,
        )?;

        let comment = self
            .ctx
            .comment_repo()
            .update_body(comment_id, &request.body)
            .await?;

        info!(comment_id = %comment_id, "Comment updated");

        self.annotate(comment, Some(caller)).await
    }

    /// Delete a comment and its reactions; author or admin
    #[instrument(skip(self))]
    pub async fn delete(&self, comment_id: CommentId, caller: UserId) -> ServiceResult<()> {
        let comment = self.find(comment_id).await?;
        OwnershipService::new(self.ctx)
            .require_owner_or_admin(caller, comment.owner_id, DomainError::NotCommentOwner)
            .await?;

        if !self.ctx.comment_repo().delete(comment_id).await? {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id = %comment_id, deleted_by = %caller, "Comment deleted");
        Ok(())
    }

    async fn find(&self, comment_id: CommentId) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| DomainError::CommentNotFound(comment_id).into())
    }

    async fn annotate(
        &self,
        comment: Comment,
        viewer: Option<UserId>,
    ) -> ServiceResult<CommentResponse> {
        let aggregator = AggregateService::new(self.ctx);
        let (aggregate, author) = tokio::try_join!(
            aggregator.for_target(TargetRef::Comment(comment.id), viewer),
            self.author_of(&comment),
        )?;
        Ok(CommentResponse::assemble(comment, author, aggregate))
    }

    async fn author_of(&self, comment: &Comment) -> ServiceResult<AuthorResponse> {
        let user = self.ctx.user_repo().find_by_id(comment.owner_id).await?;
        Ok(user.as_ref().map_or_else(
            || AuthorResponse::unknown(comment.owner_id),
            AuthorResponse::from,
        ))
    }
}
