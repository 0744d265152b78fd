//! Pick service
//!
//! Handles pick creation, reads with aggregates, edits and the cascading
//! delete.

use picks_core::{DomainError, NewPick, Pick, PickId, PickQuery, TargetRef, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    AuthorResponse, CreatePickRequest, ListPicksQuery, PickDetailResponse, PickResponse,
    UpdatePickRequest,
};

use super::aggregate::AggregateService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::ownership::OwnershipService;
use super::thread::ThreadService;

/// Pick service
pub struct PickService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PickService<'a> {
    /// Create a new PickService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a pick owned by the caller
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        owner_id: UserId,
        request: CreatePickRequest,
    ) -> ServiceResult<PickResponse> {
        request.validate()?;
        let new_pick = NewPick::new(owner_id, request.title, request.image_ref, request.link)?;

        let pick = self.ctx.pick_repo().create(&new_pick).await?;

        info!(pick_id = %pick.id, owner_id = %owner_id, "Pick created");

        self.annotate(pick, Some(owner_id)).await
    }

    /// Pick with stats and its comment thread
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        pick_id: PickId,
        viewer: Option<UserId>,
    ) -> ServiceResult<PickDetailResponse> {
        let pick = self.find(pick_id).await?;

        let threads = ThreadService::new(self.ctx);
        let (pick, comments) = tokio::try_join!(
            self.annotate(pick, viewer),
            threads.assemble(pick_id, viewer),
        )?;

        Ok(PickDetailResponse { pick, comments })
    }

    /// Pick with stats only
    #[instrument(skip(self))]
    pub async fn stats(
        &self,
        pick_id: PickId,
        viewer: Option<UserId>,
    ) -> ServiceResult<PickResponse> {
        let pick = self.find(pick_id).await?;
        self.annotate(pick, viewer).await
    }

    /// Newest picks first, each with stats
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: ListPicksQuery,
        viewer: Option<UserId>,
    ) -> ServiceResult<Vec<PickResponse>> {
        query.validate()?;
        let mut page = PickQuery::default();
        page.before = query.before;
        if let Some(limit) = query.limit {
            page.limit = limit;
        }

        let picks = self.ctx.pick_repo().list_recent(page).await?;
        if picks.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<PickId> = picks.iter().map(|p| p.id).collect();
        let owners: Vec<UserId> = picks.iter().map(|p| p.owner_id).collect();

        let aggregator = AggregateService::new(self.ctx);
        let (mut aggregates, authors) = tokio::try_join!(
            aggregator.for_picks(&ids, viewer),
            aggregator.authors(&owners),
        )?;

        let blob_urls = self.ctx.blob_urls();
        Ok(picks
            .into_iter()
            .map(|pick| {
                let aggregate = aggregates.remove(&pick.id).unwrap_or_default();
                let owner = authors
                    .get(&pick.owner_id)
                    .cloned()
                    .unwrap_or_else(|| AuthorResponse::unknown(pick.owner_id));
                PickResponse::assemble(pick, owner, aggregate, blob_urls)
            })
            .collect())
    }

    /// Edit title or link; owner only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        pick_id: PickId,
        caller: UserId,
        request: UpdatePickRequest,
    ) -> ServiceResult<PickResponse> {
        request.validate()?;
        let changes = request.into_changes().validated()?;

        let mut pick = self.find(pick_id).await?;
        OwnershipService::new(self.ctx).require_owner(
            caller,
            pick.owner_id,
            DomainError::NotPickOwner,
        )?;

        if !changes.is_empty() {
            changes.apply(&mut pick);
            self.ctx.pick_repo().update(&pick).await?;
            info!(pick_id = %pick_id, "Pick updated");
        }

        self.annotate(pick, Some(caller)).await
    }

    /// Delete a pick with its comments and every reaction on either
    #[instrument(skip(self))]
    pub async fn delete(&self, pick_id: PickId, caller: UserId) -> ServiceResult<()> {
        let pick = self.find(pick_id).await?;
        OwnershipService::new(self.ctx)
            .require_owner_or_admin(caller, pick.owner_id, DomainError::NotPickOwner)
            .await?;

        if !self.ctx.pick_repo().delete_cascade(pick_id).await? {
            return Err(DomainError::PickNotFound(pick_id).into());
        }

        info!(pick_id = %pick_id, deleted_by = %caller, "Pick deleted");
        Ok(())
    }

    async fn find(&self, pick_id: PickId) -> ServiceResult<Pick> {
        self.ctx
            .pick_repo()
            .find_by_id(pick_id)
            .await?
            .ok_or_else(|| DomainError::PickNotFound(pick_id).into())
    }

    async fn annotate(&self, pick: Pick, viewer: Option<UserId>) -> ServiceResult<PickResponse> {
        let aggregator = AggregateService::new(self.ctx);
        let (aggregate, owner) = tokio::try_join!(
            aggregator.for_target(TargetRef::Pick(pick.id), viewer),
            self.owner_of(&pick),
        )?;
        Ok(PickResponse::assemble(pick, owner, aggregate, self.ctx.blob_urls()))
    }

    async fn owner_of(&self, pick: &Pick) -> ServiceResult<AuthorResponse> {
        let owner = self.ctx.user_repo().find_by_id(pick.owner_id).await?;
        Ok(owner.as_ref().map_or_else(
            || AuthorResponse::unknown(pick.owner_id),
            AuthorResponse::from,
        ))
    }
}
