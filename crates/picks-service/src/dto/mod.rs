//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for assembling responses from domain entities

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreatePickRequest, ListPicksQuery, ReactRequest, UpdateCommentRequest,
    UpdatePickRequest,
};

pub use responses::{
    AuthorResponse, CommentResponse, HealthChecks, HealthResponse,
    PickDetailResponse, PickResponse, ReactionToggleResponse, ReadinessResponse,
};
