//! Entity to DTO mappers
//!
//! Responses are assembled from an entity, its author and its aggregate.
//! Image references are normalised here, once, on the way out.

use picks_common::BlobUrlResolver;
use picks_core::{Aggregate, Comment, Pick, ToggleResult, User};

use super::responses::{AuthorResponse, CommentResponse, PickResponse, ReactionToggleResponse};

impl From<&User> for AuthorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

impl PickResponse {
    pub fn assemble(
        pick: Pick,
        owner: AuthorResponse,
        aggregate: Aggregate,
        blob_urls: &BlobUrlResolver,
    ) -> Self {
        Self {
            id: pick.id,
            owner,
            title: pick.title,
            image_url: blob_urls.resolve(&pick.image_ref),
            link: pick.link,
            created_at: pick.created_at,
            updated_at: pick.updated_at,
            total_likes: aggregate.likes(),
            total_dislikes: aggregate.dislikes(),
            total_comments: aggregate.comments.unwrap_or(0),
            caller_reaction: aggregate.viewer,
        }
    }
}

impl CommentResponse {
    pub fn assemble(comment: Comment, author: AuthorResponse, aggregate: Aggregate) -> Self {
        Self {
            id: comment.id,
            pick_id: comment.pick_id,
            author,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            total_likes: aggregate.likes(),
            total_dislikes: aggregate.dislikes(),
            caller_reaction: aggregate.viewer,
        }
    }
}

impl From<ToggleResult> for ReactionToggleResponse {
    fn from(result: ToggleResult) -> Self {
        Self {
            action: result.action,
            total_likes: result.tally.likes,
            total_dislikes: result.tally.dislikes,
        }
    }
}
