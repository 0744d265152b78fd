//! Service context - dependency container for services
//!
//! Holds the repositories and presentation helpers needed by services.

use std::sync::Arc;

use picks_common::BlobUrlResolver;
use picks_core::traits::{CommentRepository, PickRepository, ReactionRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared. No counts or reaction state are
/// held here, every read goes to the store.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    pick_repo: Arc<dyn PickRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Presentation
    blob_urls: Arc<BlobUrlResolver>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        pick_repo: Arc<dyn PickRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        blob_urls: Arc<BlobUrlResolver>,
    ) -> Self {
        Self {
            user_repo,
            pick_repo,
            comment_repo,
            reaction_repo,
            blob_urls,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the pick repository
    pub fn pick_repo(&self) -> &dyn PickRepository {
        self.pick_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Presentation ===

    /// Get the image URL resolver
    pub fn blob_urls(&self) -> &BlobUrlResolver {
        self.blob_urls.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("blob_urls", &self.blob_urls)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    pick_repo: Option<Arc<dyn PickRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    blob_urls: Option<Arc<BlobUrlResolver>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn pick_repo(mut self, repo: Arc<dyn PickRepository>) -> Self {
        self.pick_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn blob_urls(mut self, resolver: BlobUrlResolver) -> Self {
        self.blob_urls = Some(Arc::new(resolver));
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.pick_repo.ok_or_else(|| missing("pick_repo"))?,
            self.comment_repo.ok_or_else(|| missing("comment_repo"))?,
            self.reaction_repo.ok_or_else(|| missing("reaction_repo"))?,
            self.blob_urls.ok_or_else(|| missing("blob_urls"))?,
        ))
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::internal(format!("{dependency} is required"))
}
