//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use picks_core::{CommentId, PickId, Polarity, ToggleAction, UserId};

/// Author display identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorResponse {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}

impl AuthorResponse {
    /// Placeholder when the profile row is gone
    pub fn unknown(id: UserId) -> Self {
        Self {
            id,
            name: String::new(),
            avatar: None,
        }
    }
}

// ============================================================================
// Pick Responses
// ============================================================================

/// Aggregate-annotated pick
#[derive(Debug, Clone, Serialize)]
pub struct PickResponse {
    pub id: PickId,
    pub owner: AuthorResponse,
    pub title: Option<String>,
    /// Always an absolute URL
    pub image_url: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_likes: i64,
    pub total_dislikes: i64,
    pub total_comments: i64,
    /// `null` when anonymous or not reacted
    pub caller_reaction: Option<Polarity>,
}

/// Pick plus its assembled comment thread
#[derive(Debug, Clone, Serialize)]
pub struct PickDetailResponse {
    #[serde(flatten)]
    pub pick: PickResponse,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Aggregate-annotated comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub pick_id: PickId,
    pub author: AuthorResponse,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_likes: i64,
    pub total_dislikes: i64,
    pub caller_reaction: Option<Polarity>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Result of a toggle with fresh counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReactionToggleResponse {
    pub action: ToggleAction,
    pub total_likes: i64,
    pub total_dislikes: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
