//! Remote reference images.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpImageSource;

/// Errors that can occur while downloading an image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source URL could not be parsed.
    #[error("invalid image URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request could not be sent or the body could not be read.
    #[error("image request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("image server returned HTTP {0}")]
    Status(u16),

    /// Writing the downloaded bytes failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can copy the resource at a URL into a local file.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Download `url` into `dest`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on any network, status, or write failure. `dest`
    /// may hold a partial body in that case.
    async fn download(&self, url: &str, dest: &mut tokio::fs::File) -> Result<u64, FetchError>;
}
