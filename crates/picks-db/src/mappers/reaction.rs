//! Reaction entity <-> model mapper
//!
//! Stored enums are plain strings guarded by CHECK constraints; a value the
//! domain does not recognise means the schema and code disagree.

use picks_core::entities::{Reaction, ReactionTally};
use picks_core::error::DomainError;
use picks_core::value_objects::{Polarity, TargetKind, TargetRef, UserId};

use crate::models::{ReactionModel, ReactionTallyModel};

/// Parse a stored polarity
pub fn parse_polarity(raw: &str) -> Result<Polarity, DomainError> {
    raw.parse::<Polarity>()
        .map_err(|_| DomainError::InternalError(format!("unknown polarity in store: {raw}")))
}

/// Convert ReactionModel to Reaction entity
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = TargetKind::from_str_opt(&model.target_kind).ok_or_else(|| {
            DomainError::InternalError(format!("unknown target kind in store: {}", model.target_kind))
        })?;

        Ok(Reaction {
            target: TargetRef::from_parts(kind, model.target_id),
            user_id: UserId::new(model.user_id),
            polarity: parse_polarity(&model.polarity)?,
            created_at: model.created_at,
        })
    }
}

impl From<&ReactionTallyModel> for ReactionTally {
    fn from(model: &ReactionTallyModel) -> Self {
        ReactionTally::new(model.likes, model.dislikes)
    }
}
