//! # picks-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `picks-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional reaction toggle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use picks_db::{create_pool, run_migrations, DatabaseConfig, PgReactionRepository};
//! use picks_core::{Polarity, PickId, ReactionRepository, UserId};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!     let result = reactions
//!         .toggle(PickId::new(1).into(), UserId::new(7), Polarity::Like)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ping, run_migrations, DatabaseConfig, EmbeddedMigrations, PgPool};
pub use repositories::{
    map_db_error, PgCommentRepository, PgPickRepository, PgReactionRepository, PgUserRepository,
};
