//! Test fixtures and data generators
//!
//! Request bodies sent to the API and the response shapes read back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create pick request
#[derive(Debug, Serialize)]
pub struct CreatePickRequest {
    pub title: Option<String>,
    pub image_ref: Option<String>,
    pub link: Option<String>,
}

impl CreatePickRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: Some(format!("Pick {suffix}")),
            image_ref: Some(format!("palpites/{suffix}.png")),
            link: None,
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub pick_id: i64,
    pub body: String,
}

impl CreateCommentRequest {
    pub fn on(pick_id: i64, body: impl Into<String>) -> Self {
        Self {
            pick_id,
            body: body.into(),
        }
    }
}

/// Toggle request
#[derive(Debug, Serialize)]
pub struct ReactRequest {
    pub polarity: String,
}

impl ReactRequest {
    pub fn like() -> Self {
        Self {
            polarity: "like".to_string(),
        }
    }

    pub fn dislike() -> Self {
        Self {
            polarity: "dislike".to_string(),
        }
    }
}

/// Author display identity
#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
}

/// Aggregate-annotated pick
#[derive(Debug, Deserialize)]
pub struct PickResponse {
    pub id: i64,
    pub owner: AuthorResponse,
    pub title: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub total_likes: i64,
    pub total_dislikes: i64,
    pub total_comments: i64,
    pub caller_reaction: Option<String>,
}

/// Pick with its thread
#[derive(Debug, Deserialize)]
pub struct PickDetailResponse {
    #[serde(flatten)]
    pub pick: PickResponse,
    pub comments: Vec<CommentResponse>,
}

/// Aggregate-annotated comment
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub pick_id: i64,
    pub author: AuthorResponse,
    pub body: String,
    pub total_likes: i64,
    pub total_dislikes: i64,
    pub caller_reaction: Option<String>,
}

/// Toggle result
#[derive(Debug, Deserialize)]
pub struct ToggleResponse {
    pub action: String,
    pub total_likes: i64,
    pub total_dislikes: i64,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
