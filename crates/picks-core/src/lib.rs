//! # picks-core
//!
//! Domain layer containing entities, value objects, the reaction state
//! machine, and repository traits. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Aggregate, Comment, NewComment, NewPick, Pick, PickChanges, Reaction, ReactionTally,
    ToggleResult, User, UserRole,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    CommentRepository, PickQuery, PickRepository, ReactionRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    CommentId, IdParseError, PickId, Polarity, PolarityParseError, ReactionState, ReactionWrite,
    TargetKind, TargetRef, ToggleAction, Transition, UserId,
};
