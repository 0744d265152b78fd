//! PostgreSQL implementation of CommentRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use picks_core::entities::{Comment, NewComment};
use picks_core::traits::{CommentRepository, RepoResult};
use picks_core::value_objects::{CommentId, PickId, TargetKind};

use crate::mappers::CommentInsert;
use crate::models::{CommentCountModel, CommentModel};

use super::error::{comment_not_found, map_db_error, pick_not_found};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, pick_id, owner_id, body, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_pick(&self, pick_id: PickId) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, pick_id, owner_id, body, created_at, updated_at
            FROM comments
            WHERE pick_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(pick_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(pick_id = %comment.pick_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let insert = CommentInsert::new(comment);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let parent = sqlx::query_scalar::<_, i64>("SELECT id FROM picks WHERE id = $1 FOR SHARE")
            .bind(insert.pick_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if parent.is_none() {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(pick_not_found(comment.pick_id));
        }

        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (pick_id, owner_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, pick_id, owner_id, body, created_at, updated_at
            ",
        )
        .bind(insert.pick_id)
        .bind(insert.owner_id)
        .bind(insert.body)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self, body))]
    async fn update_body(&self, id: CommentId, body: &str) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET body = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, pick_id, owner_id, body, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(body)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Comment::from).ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked =
            sqlx::query_scalar::<_, i64>("SELECT id FROM comments WHERE id = $1 FOR UPDATE")
                .bind(id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if locked.is_none() {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM reactions WHERE target_kind = $1 AND target_id = $2")
            .bind(TargetKind::Comment.as_str())
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(true)
    }

    #[instrument(skip(self, pick_ids), fields(count = pick_ids.len()))]
    async fn count_by_picks(&self, pick_ids: &[PickId]) -> RepoResult<HashMap<PickId, i64>> {
        if pick_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let raw: Vec<i64> = pick_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, CommentCountModel>(
            r"
            SELECT pick_id, COUNT(*) AS count
            FROM comments
            WHERE pick_id = ANY($1)
            GROUP BY pick_id
            ",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (PickId::new(r.pick_id), r.count))
            .collect())
    }
}
