//! Authentication extractor
//!
//! Resolves the caller from a signed bearer token. A missing header on a
//! mutating route is `Unauthenticated`; there is no fallback identity.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use picks_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Verify the bearer token in an `Authorization` header
async fn resolve<S>(parts: &mut Parts, state: &S) -> Result<AuthUser, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidAuthFormat)?;

    let app_state = AppState::from_ref(state);

    let user_id = app_state
        .jwt_service()
        .resolve_user(bearer.token())
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::App(e)
        })?;

    Ok(AuthUser::new(user_id))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Err(ApiError::MissingAuth);
        }
        resolve(parts, state).await
    }
}

/// Optional authenticated user
///
/// `None` when no authorization header is present; a present but invalid
/// token is still rejected.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The viewer id, if any
    pub fn user_id(&self) -> Option<UserId> {
        self.0.map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }
        resolve(parts, state).await.map(|auth| OptionalAuthUser(Some(auth)))
    }
}
