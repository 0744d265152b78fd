//! Entity to model mappers
//!
//! Conversions between domain entities (picks-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod comment;
mod pick;
mod reaction;
mod user;

pub use comment::CommentInsert;
pub use pick::{PickInsert, PickUpdate};
pub use reaction::parse_polarity;
