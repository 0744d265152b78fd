//! Comment handlers
//!
//! Endpoints for comment creation, edits and deletion.

use axum::{extract::State, Json};
use picks_service::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};
use picks_service::CommentService;

use crate::extractors::{AuthUser, CommentIdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment on a pick
///
/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create(auth.user_id, request).await?;
    Ok(Created(comment))
}

/// Get a single comment with stats
///
/// GET /comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    CommentIdPath(comment_id): CommentIdPath,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.get(comment_id, viewer.user_id()).await?;
    Ok(Json(comment))
}

/// Replace a comment body
///
/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentIdPath(comment_id): CommentIdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.update(comment_id, auth.user_id, request).await?;
    Ok(Json(comment))
}

/// Delete a comment and its reactions
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentIdPath(comment_id): CommentIdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
