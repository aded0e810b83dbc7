//! HTTP(S) image source.

use async_trait::async_trait;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};
use url::Url;

use super::{FetchError, ImageSource};

/// Downloads images with a shared `reqwest` client.
///
/// The client has no request timeout; a slow server holds up the seeder
/// until it answers or the connection drops.
#[derive(Debug, Clone, Default)]
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    /// Create a source with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source over an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    #[instrument(skip(self, dest))]
    async fn download(&self, url: &str, dest: &mut tokio::fs::File) -> Result<u64, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let mut written: u64 = 0;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?
        {
            dest.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        dest.flush().await?;

        debug!(bytes = written, "Image downloaded");
        Ok(written)
    }
}
