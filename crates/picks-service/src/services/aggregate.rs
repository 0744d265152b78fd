//! Aggregate service
//!
//! Derives like/dislike/comment counts and the viewer's own polarity from
//! the store on every read. Listings are batched: one grouped tally, one
//! grouped comment count and one viewer lookup regardless of page size.

use std::collections::HashMap;

use picks_core::{
    Aggregate, CommentId, PickId, Polarity, ReactionTally, RepoResult, TargetKind, TargetRef,
    UserId,
};
use tracing::instrument;

use crate::dto::AuthorResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Aggregate service
pub struct AggregateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AggregateService<'a> {
    /// Create a new AggregateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate of a single target
    #[instrument(skip(self))]
    pub async fn for_target(
        &self,
        target: TargetRef,
        viewer: Option<UserId>,
    ) -> ServiceResult<Aggregate> {
        let mut batch = self
            .batch(target.kind(), &[target.raw_id()], viewer)
            .await?;
        let mut aggregate = batch.remove(&target.raw_id()).unwrap_or_default();

        if let TargetRef::Pick(pick_id) = target {
            let counts = self.ctx.comment_repo().count_by_picks(&[pick_id]).await?;
            aggregate.comments = Some(counts.get(&pick_id).copied().unwrap_or(0));
        }
        Ok(aggregate)
    }

    /// Aggregates for a page of picks, comment counts included
    ///
    /// Every requested id is present in the result, zeroed when unreacted.
    #[instrument(skip(self, pick_ids), fields(count = pick_ids.len()))]
    pub async fn for_picks(
        &self,
        pick_ids: &[PickId],
        viewer: Option<UserId>,
    ) -> ServiceResult<HashMap<PickId, Aggregate>> {
        if pick_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let raw: Vec<i64> = pick_ids.iter().map(|id| id.into_inner()).collect();

        let (mut batch, comment_counts) = tokio::try_join!(
            self.batch(TargetKind::Pick, &raw, viewer),
            self.ctx.comment_repo().count_by_picks(pick_ids),
        )?;

        Ok(pick_ids
            .iter()
            .map(|&id| {
                let mut aggregate = batch.remove(&id.into_inner()).unwrap_or_default();
                aggregate.comments = Some(comment_counts.get(&id).copied().unwrap_or(0));
                (id, aggregate)
            })
            .collect())
    }

    /// Aggregates for a set of comments
    #[instrument(skip(self, comment_ids), fields(count = comment_ids.len()))]
    pub async fn for_comments(
        &self,
        comment_ids: &[CommentId],
        viewer: Option<UserId>,
    ) -> ServiceResult<HashMap<CommentId, Aggregate>> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let raw: Vec<i64> = comment_ids.iter().map(|id| id.into_inner()).collect();
        let mut batch = self.batch(TargetKind::Comment, &raw, viewer).await?;

        Ok(comment_ids
            .iter()
            .map(|&id| (id, batch.remove(&id.into_inner()).unwrap_or_default()))
            .collect())
    }

    /// Author display identities; missing profiles fall back to an empty name
    #[instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    pub async fn authors(
        &self,
        user_ids: &[UserId],
    ) -> ServiceResult<HashMap<UserId, AuthorResponse>> {
        let mut unique = user_ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let users = self.ctx.user_repo().find_many(&unique).await?;
        let mut authors: HashMap<UserId, AuthorResponse> = users
            .iter()
            .map(|u| (u.id, AuthorResponse::from(u)))
            .collect();
        for id in unique {
            authors
                .entry(id)
                .or_insert_with(|| AuthorResponse::unknown(id));
        }
        Ok(authors)
    }

    /// Tallies and viewer polarities for one kind, in parallel
    async fn batch(
        &self,
        kind: TargetKind,
        ids: &[i64],
        viewer: Option<UserId>,
    ) -> RepoResult<HashMap<i64, Aggregate>> {
        let reactions = self.ctx.reaction_repo();
        let viewer_lookup = async {
            match viewer {
                Some(user_id) => reactions.find_polarities(kind, ids, user_id).await,
                None => Ok(HashMap::new()),
            }
        };

        let (tallies, polarities): (HashMap<i64, ReactionTally>, HashMap<i64, Polarity>) =
            tokio::try_join!(reactions.tally_many(kind, ids), viewer_lookup)?;

        Ok(ids
            .iter()
            .map(|id| {
                let aggregate = Aggregate {
                    tally: tallies.get(id).copied().unwrap_or_default(),
                    comments: None,
                    viewer: polarities.get(id).copied(),
                };
                (*id, aggregate)
            })
            .collect())
    }
}
