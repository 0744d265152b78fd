//! # picks-common
//!
//! Shared utilities including configuration, error handling, caller identity,
//! telemetry, and blob URL normalisation.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, StorageConfig,
};
pub use error::{status_for_kind, AppError, AppResult, ErrorResponse};
pub use storage::BlobUrlResolver;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
