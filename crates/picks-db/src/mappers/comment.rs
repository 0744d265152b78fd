//! Comment entity <-> model mapper

use picks_core::entities::{Comment, NewComment};
use picks_core::value_objects::{CommentId, PickId, UserId};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            pick_id: PickId::new(model.pick_id),
            owner_id: UserId::new(model.owner_id),
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values for database insertion
pub struct CommentInsert<'a> {
    pub pick_id: i64,
    pub owner_id: i64,
    pub body: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a NewComment) -> Self {
        Self {
            pick_id: comment.pick_id.into_inner(),
            owner_id: comment.owner_id.into_inner(),
            body: &comment.body,
        }
    }
}
