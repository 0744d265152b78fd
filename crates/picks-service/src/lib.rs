//! # picks-service
//!
//! Application layer containing the reaction, aggregate, thread and
//! lifecycle services plus request/response DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    AggregateService, CommentService, OwnershipService, PickService, ReactionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, ThreadService,
};
