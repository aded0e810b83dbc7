//! Copy a remote product image into the bucket.
//!
//! [`ImageRehoster::rehost`] never fails: any download, storage, or local I/O
//! problem is logged and the source URL is returned instead.

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::config::StorageConfig;
use crate::images::{FetchError, ImageSource};
use crate::storage::{JPEG_CONTENT_TYPE, ObjectStore, PutObject, StorageError, product_image_key};

const TEMP_PREFIX: &str = "product_img_";
const TEMP_SUFFIX: &str = ".jpg";

/// Where a product's image ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RehostOutcome {
    /// Uploaded; the URL points into the bucket.
    Rehosted(String),
    /// Rehosting failed; the URL is the untouched source.
    FallbackToOrigin(String),
}

impl RehostOutcome {
    /// The URL to store on the product, whichever way it went.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Rehosted(url) | Self::FallbackToOrigin(url) => url,
        }
    }

    /// Consume the outcome, keeping only the URL.
    #[must_use]
    pub fn into_url(self) -> String {
        match self {
            Self::Rehosted(url) | Self::FallbackToOrigin(url) => url,
        }
    }

    #[must_use]
    pub const fn is_rehosted(&self) -> bool {
        matches!(self, Self::Rehosted(_))
    }
}

/// Reasons a single rehost attempt failed.
#[derive(Debug, Error)]
pub enum RehostError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Creating or sizing the temporary file failed.
    #[error("temporary file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads product images and re-uploads them to the configured bucket.
#[derive(Clone)]
pub struct ImageRehoster {
    source: Arc<dyn ImageSource>,
    store: Arc<dyn ObjectStore>,
    storage: StorageConfig,
    temp_dir: Option<PathBuf>,
}

impl std::fmt::Debug for ImageRehoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRehoster")
            .field("storage", &self.storage)
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}

impl ImageRehoster {
    /// Create a rehoster for the configured bucket.
    #[must_use]
    pub fn new(
        source: Arc<dyn ImageSource>,
        store: Arc<dyn ObjectStore>,
        storage: &StorageConfig,
    ) -> Self {
        Self {
            source,
            store,
            storage: storage.clone(),
            temp_dir: None,
        }
    }

    /// Create temporary files in `dir` instead of the system temp directory.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// The bucket images are uploaded to.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.storage.bucket
    }

    /// Rehost one product image.
    ///
    /// Returns [`RehostOutcome::Rehosted`] with the bucket URL on success and
    /// [`RehostOutcome::FallbackToOrigin`] with `source_url` otherwise.
    #[instrument(skip(self, source_url))]
    pub async fn rehost(&self, source_url: &str, product_name: &str) -> RehostOutcome {
        info!("Uploading image");

        let key = product_image_key(product_name);
        match self.try_rehost(source_url, &key).await {
            Ok(url) => {
                info!(url = %url, "Image uploaded");
                RehostOutcome::Rehosted(url)
            }
            Err(e) => {
                warn!(error = %e, source_url, "Failed to upload image, keeping source URL");
                RehostOutcome::FallbackToOrigin(source_url.to_owned())
            }
        }
    }

    /// Download into a temporary file, upload it, and return the bucket URL.
    ///
    /// The temporary file is removed when `temp` drops, on every return path.
    async fn try_rehost(&self, source_url: &str, key: &str) -> Result<String, RehostError> {
        let temp = self.temp_file()?;

        {
            let mut file = tokio::fs::File::from_std(temp.reopen()?);
            self.source.download(source_url, &mut file).await?;
            file.flush().await?;
        }

        let content_length = tokio::fs::metadata(temp.path()).await?.len();

        self.store
            .put_object(PutObject {
                bucket: &self.storage.bucket,
                key,
                body: temp.path(),
                content_type: JPEG_CONTENT_TYPE,
                content_length,
            })
            .await?;

        if let Err(e) = temp.close() {
            // The object is already stored; a stray temp file doesn't undo that.
            warn!(error = %e, "Failed to remove temporary image file");
        }

        Ok(self.storage.object_url(key))
    }

    fn temp_file(&self) -> std::io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);

        match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}
