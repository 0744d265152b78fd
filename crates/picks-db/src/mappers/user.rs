//! User entity <-> model mapper

use picks_core::entities::{User, UserRole};
use picks_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            avatar: model.avatar,
            role: UserRole::from_db(&model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
