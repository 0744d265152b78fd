//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub target_kind: String,
    pub target_id: i64,
    pub user_id: i64,
    pub polarity: String,
    pub created_at: DateTime<Utc>,
}

/// Like/dislike counts for one target (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionTallyModel {
    pub target_id: i64,
    pub likes: i64,
    pub dislikes: i64,
}

/// A viewer's polarity on one target (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ViewerPolarityModel {
    pub target_id: i64,
    pub polarity: String,
}
