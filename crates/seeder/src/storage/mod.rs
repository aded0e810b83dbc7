//! Object storage for rehosted product images.
//!
//! [`ObjectStore`] is the seam the rehoster uploads through; [`S3ObjectStore`]
//! is the S3/LocalStack implementation.

pub mod key;
pub mod s3;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub use key::{product_image_key, sanitize_name};
pub use s3::S3ObjectStore;

/// Content type of every rehosted image.
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Errors that can occur when storing an object.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the local file to upload failed.
    #[error("failed to read upload body: {0}")]
    Body(String),

    /// The storage service rejected the request.
    #[error("storage request failed: {0}")]
    Request(String),
}

/// A single object upload.
#[derive(Debug, Clone, Copy)]
pub struct PutObject<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
    /// Local file holding the object body.
    pub body: &'a Path,
    pub content_type: &'a str,
    /// Size of `body` in bytes.
    pub content_length: u64,
}

/// Something that can store a local file under a bucket and key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store the object, replacing any existing object at the same key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the body cannot be read or the service
    /// rejects the upload.
    async fn put_object(&self, request: PutObject<'_>) -> Result<(), StorageError>;
}
