//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod aggregate;
pub mod comment;
pub mod context;
pub mod error;
pub mod ownership;
pub mod pick;
pub mod reaction;
pub mod thread;

// Re-export all services for convenience
pub use aggregate::AggregateService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use ownership::OwnershipService;
pub use pick::PickService;
pub use reaction::ReactionService;
pub use thread::ThreadService;
