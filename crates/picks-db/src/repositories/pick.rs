//! PostgreSQL implementation of PickRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use picks_core::entities::{NewPick, Pick};
use picks_core::traits::{PickQuery, PickRepository, RepoResult};
use picks_core::value_objects::{PickId, TargetKind};

use crate::mappers::{PickInsert, PickUpdate};
use crate::models::PickModel;

use super::error::{map_db_error, pick_not_found};

/// Hard cap on one listing page
const MAX_PAGE_SIZE: i64 = 100;

/// PostgreSQL implementation of PickRepository
#[derive(Clone)]
pub struct PgPickRepository {
    pool: PgPool,
}

impl PgPickRepository {
    /// Create a new PgPickRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PickRepository for PgPickRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PickId) -> RepoResult<Option<Pick>> {
        let result = sqlx::query_as::<_, PickModel>(
            r"
            SELECT id, owner_id, title, image_ref, link, created_at, updated_at
            FROM picks
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Pick::from))
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, query: PickQuery) -> RepoResult<Vec<Pick>> {
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE);

        // A cursor that no longer exists yields an empty page
        let results = sqlx::query_as::<_, PickModel>(
            r"
            SELECT id, owner_id, title, image_ref, link, created_at, updated_at
            FROM picks
            WHERE $1::BIGINT IS NULL
               OR (created_at, id) < (SELECT created_at, id FROM picks WHERE id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(query.before.map(PickId::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Pick::from).collect())
    }

    #[instrument(skip(self, pick), fields(owner_id = %pick.owner_id))]
    async fn create(&self, pick: &NewPick) -> RepoResult<Pick> {
        let insert = PickInsert::new(pick);

        let model = sqlx::query_as::<_, PickModel>(
            r"
            INSERT INTO picks (owner_id, title, image_ref, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, title, image_ref, link, created_at, updated_at
            ",
        )
        .bind(insert.owner_id)
        .bind(insert.title)
        .bind(insert.image_ref)
        .bind(insert.link)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Pick::from(model))
    }

    #[instrument(skip(self, pick), fields(pick_id = %pick.id))]
    async fn update(&self, pick: &Pick) -> RepoResult<()> {
        let update = PickUpdate::new(pick);

        let result = sqlx::query(
            r"
            UPDATE picks
            SET title = $2, link = $3, updated_at = $4
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.title)
        .bind(update.link)
        .bind(pick.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(pick_not_found(pick.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_cascade(&self, id: PickId) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the pick first: concurrent toggles and comment inserts hold a
        // share lock on it (or on its comments) and must finish or fail first.
        let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM picks WHERE id = $1 FOR UPDATE")
            .bind(id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if locked.is_none() {
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(false);
        }

        let comment_ids = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM comments WHERE pick_id = $1 FOR UPDATE",
        )
        .bind(id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let comment_reactions = sqlx::query(
            "DELETE FROM reactions WHERE target_kind = $1 AND target_id = ANY($2)",
        )
        .bind(TargetKind::Comment.as_str())
        .bind(&comment_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let pick_reactions =
            sqlx::query("DELETE FROM reactions WHERE target_kind = $1 AND target_id = $2")
                .bind(TargetKind::Pick.as_str())
                .bind(id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?
                .rows_affected();

        sqlx::query("DELETE FROM comments WHERE pick_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM picks WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            comments = comment_ids.len(),
            pick_reactions,
            comment_reactions,
            "Pick cascade removed"
        );
        Ok(true)
    }
}
