//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{comments, health, picks, reactions};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(pick_routes()).merge(comment_routes())
}

/// Pick routes
fn pick_routes() -> Router<AppState> {
    Router::new()
        .route("/picks", get(picks::list_picks).post(picks::create_pick))
        .route(
            "/picks/:pick_id",
            get(picks::get_pick)
                .patch(picks::update_pick)
                .delete(picks::delete_pick),
        )
        .route("/picks/:pick_id/stats", get(picks::get_pick_stats))
        .route("/picks/:pick_id/comments", get(picks::get_pick_comments))
        .route("/picks/:pick_id/react", post(reactions::react_to_pick))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", post(comments::create_comment))
        .route(
            "/comments/:comment_id",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route("/comments/:comment_id/react", post(reactions::react_to_comment))
}
