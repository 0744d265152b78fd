//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in picks-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod pick;
mod reaction;
mod user;

pub use comment::PgCommentRepository;
pub use error::map_db_error;
pub use pick::PgPickRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
