//! Path parameter extractors
//!
//! Typed extraction of pick and comment ids from path segments.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use picks_core::{CommentId, PickId};

use crate::response::ApiError;

/// `:pick_id` path segment
#[derive(Debug, Clone, Copy)]
pub struct PickIdPath(pub PickId);

/// `:comment_id` path segment
#[derive(Debug, Clone, Copy)]
pub struct CommentIdPath(pub CommentId);

#[async_trait]
impl<S> FromRequestParts<S> for PickIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        PickId::parse(&raw)
            .map(PickIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid pick_id format"))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CommentIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        CommentId::parse(&raw)
            .map(CommentIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}
