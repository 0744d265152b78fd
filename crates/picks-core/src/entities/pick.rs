//! Pick entity - a shared prediction with an image

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{PickId, UserId};

/// Maximum title length in characters
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum link length in characters
pub const MAX_LINK_CHARS: usize = 2048;

/// Pick entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub id: PickId,
    pub owner_id: UserId,
    pub title: Option<String>,
    /// Absolute URL or bare blob-store key, exactly as stored
    pub image_ref: String,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pick {
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Values for a pick that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPick {
    pub owner_id: UserId,
    pub title: Option<String>,
    pub image_ref: String,
    pub link: Option<String>,
}

impl NewPick {
    /// Build a new pick, rejecting a missing image reference
    pub fn new(
        owner_id: UserId,
        title: Option<String>,
        image_ref: Option<String>,
        link: Option<String>,
    ) -> Result<Self, DomainError> {
        let image_ref = image_ref
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingImageRef)?;

        let title = normalize_optional(title);
        let link = normalize_optional(link);
        validate_title(title.as_deref())?;
        validate_link(link.as_deref())?;

        Ok(Self {
            owner_id,
            title,
            image_ref,
            link,
        })
    }
}

/// Owner edits to a pick; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickChanges {
    pub title: Option<Option<String>>,
    pub link: Option<Option<String>>,
}

impl PickChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.link.is_none()
    }

    /// Validate and normalise the edits
    pub fn validated(self) -> Result<Self, DomainError> {
        let title = self.title.map(normalize_optional);
        let link = self.link.map(normalize_optional);
        if let Some(t) = &title {
            validate_title(t.as_deref())?;
        }
        if let Some(l) = &link {
            validate_link(l.as_deref())?;
        }
        Ok(Self { title, link })
    }

    /// Apply onto an existing pick
    pub fn apply(self, pick: &mut Pick) {
        if let Some(title) = self.title {
            pick.title = title;
        }
        if let Some(link) = self.link {
            pick.link = link;
        }
        pick.updated_at = Utc::now();
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn validate_title(title: Option<&str>) -> Result<(), DomainError> {
    match title {
        Some(t) if t.chars().count() > MAX_TITLE_CHARS => Err(DomainError::ContentTooLong {
            field: "title",
            max: MAX_TITLE_CHARS,
        }),
        _ => Ok(()),
    }
}

fn validate_link(link: Option<&str>) -> Result<(), DomainError> {
    let Some(link) = link else {
        return Ok(());
    };
    if link.chars().count() > MAX_LINK_CHARS {
        return Err(DomainError::ContentTooLong {
            field: "link",
            max: MAX_LINK_CHARS,
        });
    }
    if !(link.starts_with("http://") || link.starts_with("https://")) {
        return Err(DomainError::ValidationError(
            "link must be an absolute http(s) URL".to_string(),
        ));
    }
    Ok(())
}
