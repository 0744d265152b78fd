//! Pick database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for picks table
#[derive(Debug, Clone, FromRow)]
pub struct PickModel {
    pub id: i64,
    pub owner_id: i64,
    pub title: Option<String>,
    pub image_ref: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
