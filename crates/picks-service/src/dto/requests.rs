//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use picks_core::{DomainError, PickChanges, PickId, Polarity};

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Pick Requests
// ============================================================================

/// Create pick request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePickRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    /// Absolute URL or blob-store key of an already uploaded image
    pub image_ref: Option<String>,

    #[validate(length(max = 2048, message = "Link must be at most 2048 characters"))]
    pub link: Option<String>,
}

/// Update pick request; `null` clears a field, omission keeps it
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePickRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub link: Option<Option<String>>,
}

impl UpdatePickRequest {
    pub fn into_changes(self) -> PickChanges {
        PickChanges {
            title: self.title,
            link: self.link,
        }
    }
}

/// Listing query (`?before=<pick id>&limit=<n>`)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListPicksQuery {
    pub before: Option<PickId>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub pick_id: PickId,

    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub body: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub body: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle reaction request
///
/// Polarity stays a string here so an unknown value surfaces as a domain
/// error rather than a body rejection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactRequest {
    pub polarity: String,
}

impl ReactRequest {
    /// Parse the requested polarity
    ///
    /// # Errors
    /// Returns `InvalidPolarity` for anything but `like` / `dislike`
    pub fn polarity(&self) -> Result<Polarity, DomainError> {
        self.polarity
            .parse()
            .map_err(|_| DomainError::InvalidPolarity(self.polarity.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_comment_validation() {
        let req = CreateCommentRequest {
            pick_id: PickId::new(1),
            body: "nice pick".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = CreateCommentRequest {
            pick_id: PickId::new(1),
            body: String::new(),
        };
        assert!(req.validate().is_err());

        let req = CreateCommentRequest {
            pick_id: PickId::new(1),
            body: "x".repeat(1001),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_comment_length_counts_characters() {
        let req = UpdateCommentRequest {
            body: "ã".repeat(1000),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_pick_distinguishes_null_and_absent() {
        let req: UpdatePickRequest = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(req.title, Some(None));
        assert_eq!(req.link, None);

        let req: UpdatePickRequest =
            serde_json::from_str(r#"{"link": "https://example.com"}"#).unwrap();
        assert_eq!(req.link, Some(Some("https://example.com".to_string())));
        assert!(req.into_changes().title.is_none());
    }

    #[test]
    fn test_react_request_polarity() {
        let req: ReactRequest = serde_json::from_str(r#"{"polarity": "dislike"}"#).unwrap();
        assert_eq!(req.polarity().unwrap(), Polarity::Dislike);

        let req = ReactRequest {
            polarity: "love".to_string(),
        };
        assert!(matches!(req.polarity(), Err(DomainError::InvalidPolarity(p)) if p == "love"));
    }

    #[test]
    fn test_list_query_limit_range() {
        let q = ListPicksQuery {
            before: None,
            limit: Some(0),
        };
        assert!(q.validate().is_err());

        let q = ListPicksQuery {
            before: Some(PickId::new(5)),
            limit: Some(20),
        };
        assert!(q.validate().is_ok());
    }
}
