//! User entity - the identity and display profile behind picks and comments

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Privilege level stored with the identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Unknown roles fall back to the unprivileged one
    pub fn from_db(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: UserId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            avatar: None,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Owner or admin may delete content
    pub fn may_delete(&self, owner_id: UserId) -> bool {
        self.id == owner_id || self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(UserRole::from_db("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_db("user"), UserRole::User);
        assert_eq!(UserRole::from_db("moderator"), UserRole::User);
    }

    #[test]
    fn test_may_delete() {
        let owner = User::new(UserId::new(1), "owner".to_string());
        let other = User::new(UserId::new(2), "other".to_string());
        let mut admin = User::new(UserId::new(3), "admin".to_string());
        admin.role = UserRole::Admin;

        assert!(owner.may_delete(UserId::new(1)));
        assert!(!other.may_delete(UserId::new(1)));
        assert!(admin.may_delete(UserId::new(1)));
    }
}
