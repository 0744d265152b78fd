//! Ownership service
//!
//! Only authors edit their content; authors or admins delete it.
//! Admin is a property of the stored identity, never of the token.

use picks_core::{DomainError, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ownership checks for picks and comments
pub struct OwnershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OwnershipService<'a> {
    /// Create a new OwnershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the caller is flagged admin in the store
    #[instrument(skip(self))]
    pub async fn is_admin(&self, user_id: UserId) -> ServiceResult<bool> {
        let user = self.ctx.user_repo().find_by_id(user_id).await?;
        Ok(user.is_some_and(|u| u.is_admin()))
    }

    /// Fail with `denied` unless the caller owns the content
    pub fn require_owner(
        &self,
        caller: UserId,
        owner: UserId,
        denied: DomainError,
    ) -> ServiceResult<()> {
        if caller == owner {
            Ok(())
        } else {
            Err(denied.into())
        }
    }

    /// Fail with `denied` unless the caller owns the content or is admin
    #[instrument(skip(self, denied))]
    pub async fn require_owner_or_admin(
        &self,
        caller: UserId,
        owner: UserId,
        denied: DomainError,
    ) -> ServiceResult<()> {
        if caller == owner {
            return Ok(());
        }
        if self.is_admin(caller).await? {
            debug!(caller = %caller, owner = %owner, "Admin override");
            return Ok(());
        }
        Err(denied.into())
    }
}
