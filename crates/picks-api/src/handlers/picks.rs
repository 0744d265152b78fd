//! Pick handlers
//!
//! Endpoints for pick CRUD, stats and the comment thread.

use axum::{extract::State, Json};
use picks_service::dto::{
    CommentResponse, CreatePickRequest, PickDetailResponse, PickResponse, UpdatePickRequest,
};
use picks_service::{PickService, ThreadService};

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, PickIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List picks, newest first
///
/// GET /picks
pub async fn list_picks(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<PickResponse>>> {
    let service = PickService::new(state.service_context());
    let picks = service
        .list(pagination.into_query(), viewer.user_id())
        .await?;
    Ok(Json(picks))
}

/// Create a new pick
///
/// POST /picks
pub async fn create_pick(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePickRequest>,
) -> ApiResult<Created<PickResponse>> {
    let service = PickService::new(state.service_context());
    let pick = service.create(auth.user_id, request).await?;
    Ok(Created(pick))
}

/// Get a pick with stats and comments
///
/// GET /picks/{pick_id}
pub async fn get_pick(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    PickIdPath(pick_id): PickIdPath,
) -> ApiResult<Json<PickDetailResponse>> {
    let service = PickService::new(state.service_context());
    let pick = service.get(pick_id, viewer.user_id()).await?;
    Ok(Json(pick))
}

/// Get a pick's stats only
///
/// GET /picks/{pick_id}/stats
pub async fn get_pick_stats(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    PickIdPath(pick_id): PickIdPath,
) -> ApiResult<Json<PickResponse>> {
    let service = PickService::new(state.service_context());
    let pick = service.stats(pick_id, viewer.user_id()).await?;
    Ok(Json(pick))
}

/// Get a pick's comment thread
///
/// GET /picks/{pick_id}/comments
pub async fn get_pick_comments(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    PickIdPath(pick_id): PickIdPath,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = ThreadService::new(state.service_context());
    let comments = service.thread(pick_id, viewer.user_id()).await?;
    Ok(Json(comments))
}

/// Edit a pick's title or link
///
/// PATCH /picks/{pick_id}
pub async fn update_pick(
    State(state): State<AppState>,
    auth: AuthUser,
    PickIdPath(pick_id): PickIdPath,
    ValidatedJson(request): ValidatedJson<UpdatePickRequest>,
) -> ApiResult<Json<PickResponse>> {
    let service = PickService::new(state.service_context());
    let pick = service.update(pick_id, auth.user_id, request).await?;
    Ok(Json(pick))
}

/// Delete a pick with its comments and reactions
///
/// DELETE /picks/{pick_id}
pub async fn delete_pick(
    State(state): State<AppState>,
    auth: AuthUser,
    PickIdPath(pick_id): PickIdPath,
) -> ApiResult<NoContent> {
    let service = PickService::new(state.service_context());
    service.delete(pick_id, auth.user_id).await?;
    Ok(NoContent)
}
