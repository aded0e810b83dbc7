//! S3-compatible object store (AWS S3 or LocalStack).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use super::{ObjectStore, PutObject, StorageError};
use crate::config::StorageConfig;

/// Name reported by the static credentials provider.
const CREDENTIALS_PROVIDER: &str = "shop-seed";

/// Object store backed by the AWS SDK S3 client.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Wrap an already configured client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client for the configured endpoint and region.
    ///
    /// Static credentials are used when configured; otherwise the AWS default
    /// credential chain (environment, profile, instance metadata) applies.
    /// The bucket is not checked here; it is an external precondition.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint);

        if let Some(creds) = &config.credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.expose_secret(),
                None,
                None,
                CREDENTIALS_PROVIDER,
            ));
        }

        let sdk_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style)
            .build();

        Self::new(Client::from_conf(s3_config))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self, request), fields(bucket = %request.bucket, key = %request.key))]
    async fn put_object(&self, request: PutObject<'_>) -> Result<(), StorageError> {
        let body = ByteStream::from_path(request.body)
            .await
            .map_err(|e| StorageError::Body(e.to_string()))?;

        let content_length = i64::try_from(request.content_length)
            .map_err(|_| StorageError::Body(format!("body too large: {} bytes", request.content_length)))?;

        self.client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .body(body)
            .content_type(request.content_type)
            .content_length(content_length)
            .send()
            .await
            .map_err(|e| StorageError::Request(DisplayErrorContext(&e).to_string()))?;

        debug!(bytes = request.content_length, "Object stored");
        Ok(())
    }
}
