//! Image reference normalisation
//!
//! Picks store either an absolute URL or a bare object key. Readers always
//! receive an absolute URL; the rewrite is a pure string transform.

use crate::config::StorageConfig;

/// Turns stored image references into retrieval URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobUrlResolver {
    bucket: String,
    region: String,
}

impl BlobUrlResolver {
    #[must_use]
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.bucket.clone(), config.region.clone())
    }

    /// Base URL every bare key is resolved against
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }

    /// Normalise one reference; absolute http(s) URLs pass through untouched
    #[must_use]
    pub fn resolve(&self, image_ref: &str) -> String {
        if is_absolute(image_ref) {
            return image_ref.to_string();
        }
        format!("{}/{}", self.base_url(), image_ref.trim_start_matches('/'))
    }
}

fn is_absolute(s: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .any(|scheme| s.get(..scheme.len()).is_some_and(|head| head.eq_ignore_ascii_case(scheme)))
}
