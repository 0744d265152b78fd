//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the token verifier, the pool (for readiness only) and configuration.

use std::sync::Arc;

use picks_common::{AppConfig, JwtService};
use picks_db::PgPool;
use picks_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Bearer token verifier
    jwt_service: Arc<JwtService>,
    /// Connection pool, probed by the readiness check
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        jwt_service: JwtService,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            jwt_service: Arc::new(jwt_service),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("jwt_service", &self.jwt_service)
            .field("config", &"AppConfig")
            .finish()
    }
}
