//! PostgreSQL implementation of ReactionRepository
//!
//! The toggle runs as one transaction:
//! 1. share-lock the target row so a concurrent delete cannot orphan the reaction
//! 2. try to insert; a returned row means there was no reaction
//! 3. otherwise lock the existing row, let the state machine decide, then
//!    delete or update in place
//! 4. read fresh counts before commit

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{instrument, warn};

use picks_core::entities::{Reaction, ReactionTally, ToggleResult};
use picks_core::error::DomainError;
use picks_core::traits::{ReactionRepository, RepoResult};
use picks_core::value_objects::{
    Polarity, ReactionState, ReactionWrite, TargetKind, TargetRef, ToggleAction, UserId,
};

use crate::mappers::parse_polarity;
use crate::models::{ReactionModel, ReactionTallyModel, ViewerPolarityModel};

use super::error::{comment_not_found, map_db_error, pick_not_found};

/// Insert/lock rounds before giving up on a row that keeps vanishing
const MAX_TOGGLE_ROUNDS: usize = 16;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Share-lock the target row; fixed query per kind
async fn lock_target(conn: &mut PgConnection, target: TargetRef) -> RepoResult<()> {
    let sql = match target {
        TargetRef::Pick(_) => "SELECT id FROM picks WHERE id = $1 FOR SHARE",
        TargetRef::Comment(_) => "SELECT id FROM comments WHERE id = $1 FOR SHARE",
    };

    let found = sqlx::query_scalar::<_, i64>(sql)
        .bind(target.raw_id())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

    match (found, target) {
        (Some(_), _) => Ok(()),
        (None, TargetRef::Pick(id)) => Err(pick_not_found(id)),
        (None, TargetRef::Comment(id)) => Err(comment_not_found(id)),
    }
}

/// Apply one state transition for (target, user)
async fn apply_toggle(
    conn: &mut PgConnection,
    target: TargetRef,
    user_id: UserId,
    requested: Polarity,
) -> RepoResult<ToggleAction> {
    let kind = target.kind().as_str();

    for round in 0..MAX_TOGGLE_ROUNDS {
        let inserted = sqlx::query_scalar::<_, String>(
            r"
            INSERT INTO reactions (target_kind, target_id, user_id, polarity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (target_kind, target_id, user_id) DO NOTHING
            RETURNING polarity
            ",
        )
        .bind(kind)
        .bind(target.raw_id())
        .bind(user_id.into_inner())
        .bind(requested.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        if inserted.is_some() {
            return Ok(ReactionState::None.toggle(requested).action);
        }

        let current = sqlx::query_scalar::<_, String>(
            r"
            SELECT polarity FROM reactions
            WHERE target_kind = $1 AND target_id = $2 AND user_id = $3
            FOR UPDATE
            ",
        )
        .bind(kind)
        .bind(target.raw_id())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        let Some(current) = current else {
            warn!(%target, %user_id, round, "Reaction vanished between insert and lock, retrying");
            continue;
        };

        let transition = ReactionState::from(Some(parse_polarity(&current)?)).toggle(requested);
        match transition.write {
            ReactionWrite::Delete => {
                sqlx::query(
                    "DELETE FROM reactions WHERE target_kind = $1 AND target_id = $2 AND user_id = $3",
                )
                .bind(kind)
                .bind(target.raw_id())
                .bind(user_id.into_inner())
                .execute(&mut *conn)
                .await
                .map_err(map_db_error)?;
            }
            ReactionWrite::Update(polarity) => {
                sqlx::query(
                    r"
                    UPDATE reactions SET polarity = $4
                    WHERE target_kind = $1 AND target_id = $2 AND user_id = $3
                    ",
                )
                .bind(kind)
                .bind(target.raw_id())
                .bind(user_id.into_inner())
                .bind(polarity.as_str())
                .execute(&mut *conn)
                .await
                .map_err(map_db_error)?;
            }
            ReactionWrite::Insert(_) => {
                return Err(DomainError::InternalError(
                    "existing reaction resolved to an insert".to_string(),
                ));
            }
        }
        return Ok(transition.action);
    }

    Err(DomainError::Conflict(
        "reaction changed concurrently too many times".to_string(),
    ))
}

async fn tally_one(conn: &mut PgConnection, target: TargetRef) -> RepoResult<ReactionTally> {
    let (likes, dislikes) = sqlx::query_as::<_, (i64, i64)>(
        r"
        SELECT COUNT(*) FILTER (WHERE polarity = 'like')    AS likes,
               COUNT(*) FILTER (WHERE polarity = 'dislike') AS dislikes
        FROM reactions
        WHERE target_kind = $1 AND target_id = $2
        ",
    )
    .bind(target.kind().as_str())
    .bind(target.raw_id())
    .fetch_one(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(ReactionTally::new(likes, dislikes))
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self), fields(target_kind = %target.kind(), target_id = target.raw_id()))]
    async fn toggle(
        &self,
        target: TargetRef,
        user_id: UserId,
        polarity: Polarity,
    ) -> RepoResult<ToggleResult> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        lock_target(&mut tx, target).await?;
        let action = apply_toggle(&mut tx, target, user_id, polarity).await?;
        let tally = tally_one(&mut tx, target).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(ToggleResult { action, tally })
    }

    #[instrument(skip(self))]
    async fn find(&self, target: TargetRef, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT target_kind, target_id, user_id, polarity, created_at
            FROM reactions
            WHERE target_kind = $1 AND target_id = $2 AND user_id = $3
            ",
        )
        .bind(target.kind().as_str())
        .bind(target.raw_id())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self, target_ids), fields(count = target_ids.len()))]
    async fn tally_many(
        &self,
        kind: TargetKind,
        target_ids: &[i64],
    ) -> RepoResult<HashMap<i64, ReactionTally>> {
        if target_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = sqlx::query_as::<_, ReactionTallyModel>(
            r"
            SELECT target_id,
                   COUNT(*) FILTER (WHERE polarity = 'like')    AS likes,
                   COUNT(*) FILTER (WHERE polarity = 'dislike') AS dislikes
            FROM reactions
            WHERE target_kind = $1 AND target_id = ANY($2)
            GROUP BY target_id
            ",
        )
        .bind(kind.as_str())
        .bind(target_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .iter()
            .map(|r| (r.target_id, ReactionTally::from(r)))
            .collect())
    }

    #[instrument(skip(self, target_ids), fields(count = target_ids.len()))]
    async fn find_polarities(
        &self,
        kind: TargetKind,
        target_ids: &[i64],
        user_id: UserId,
    ) -> RepoResult<HashMap<i64, Polarity>> {
        if target_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = sqlx::query_as::<_, ViewerPolarityModel>(
            r"
            SELECT target_id, polarity
            FROM reactions
            WHERE target_kind = $1 AND target_id = ANY($2) AND user_id = $3
            ",
        )
        .bind(kind.as_str())
        .bind(target_ids)
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(|r| Ok((r.target_id, parse_polarity(&r.polarity)?)))
            .collect()
    }
}
