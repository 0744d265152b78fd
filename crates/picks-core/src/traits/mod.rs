//! Repository ports

mod repositories;

pub use repositories::{
    CommentRepository, PickQuery, PickRepository, ReactionRepository, RepoResult, UserRepository,
};
