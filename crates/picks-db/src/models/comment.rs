//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub pick_id: i64,
    pub owner_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Grouped comment count per pick (from query)
#[derive(Debug, Clone, FromRow)]
pub struct CommentCountModel {
    pub pick_id: i64,
    pub count: i64,
}
