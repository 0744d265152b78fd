//! Reaction handlers
//!
//! Like/dislike toggles on picks and comments.

use axum::{extract::State, Json};
use picks_core::TargetRef;
use picks_service::dto::{ReactRequest, ReactionToggleResponse};
use picks_service::ReactionService;

use crate::extractors::{AuthUser, CommentIdPath, PickIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle a reaction on a pick
///
/// POST /picks/{pick_id}/react
pub async fn react_to_pick(
    State(state): State<AppState>,
    auth: AuthUser,
    PickIdPath(pick_id): PickIdPath,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<Json<ReactionToggleResponse>> {
    toggle(&state, auth, TargetRef::Pick(pick_id), &request).await
}

/// Toggle a reaction on a comment
///
/// POST /comments/{comment_id}/react
pub async fn react_to_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentIdPath(comment_id): CommentIdPath,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<Json<ReactionToggleResponse>> {
    toggle(&state, auth, TargetRef::Comment(comment_id), &request).await
}

async fn toggle(
    state: &AppState,
    auth: AuthUser,
    target: TargetRef,
    request: &ReactRequest,
) -> ApiResult<Json<ReactionToggleResponse>> {
    let service = ReactionService::new(state.service_context());
    let result = service.toggle(auth.user_id, target, request).await?;
    Ok(Json(result))
}
