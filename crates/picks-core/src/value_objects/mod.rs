//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction_state;
mod target;

pub use ids::{CommentId, IdParseError, PickId, UserId};
pub use reaction_state::{
    Polarity, PolarityParseError, ReactionState, ReactionWrite, ToggleAction, Transition,
};
pub use target::{TargetKind, TargetRef};
