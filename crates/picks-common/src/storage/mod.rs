//! Blob store helpers

mod blob_url;

pub use blob_url::BlobUrlResolver;
