//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod pick;
mod reaction;
mod user;

pub use comment::{CommentCountModel, CommentModel};
pub use pick::PickModel;
pub use reaction::{ReactionModel, ReactionTallyModel, ViewerPolarityModel};
pub use user::UserModel;
