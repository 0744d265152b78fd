//! Domain entities - core business objects

mod comment;
mod pick;
mod reaction;
mod user;

pub use comment::{Comment, NewComment, MAX_BODY_CHARS, MIN_BODY_CHARS};
pub use pick::{NewPick, Pick, PickChanges, MAX_LINK_CHARS, MAX_TITLE_CHARS};
pub use reaction::{Aggregate, Reaction, ReactionTally, ToggleResult};
pub use user::{User, UserRole};
