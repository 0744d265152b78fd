//! Pick entity <-> model mapper

use picks_core::entities::{NewPick, Pick};
use picks_core::value_objects::{PickId, UserId};

use crate::models::PickModel;

/// Convert PickModel to Pick entity
impl From<PickModel> for Pick {
    fn from(model: PickModel) -> Self {
        Pick {
            id: PickId::new(model.id),
            owner_id: UserId::new(model.owner_id),
            title: model.title,
            image_ref: model.image_ref,
            link: model.link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values for database insertion
pub struct PickInsert<'a> {
    pub owner_id: i64,
    pub title: Option<&'a str>,
    pub image_ref: &'a str,
    pub link: Option<&'a str>,
}

impl<'a> PickInsert<'a> {
    pub fn new(pick: &'a NewPick) -> Self {
        Self {
            owner_id: pick.owner_id.into_inner(),
            title: pick.title.as_deref(),
            image_ref: &pick.image_ref,
            link: pick.link.as_deref(),
        }
    }
}

/// Values for database update; only owner-editable columns
pub struct PickUpdate<'a> {
    pub id: i64,
    pub title: Option<&'a str>,
    pub link: Option<&'a str>,
}

impl<'a> PickUpdate<'a> {
    pub fn new(pick: &'a Pick) -> Self {
        Self {
            id: pick.id.into_inner(),
            title: pick.title.as_deref(),
            link: pick.link.as_deref(),
        }
    }
}
