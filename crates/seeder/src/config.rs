//! Seeder configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SEED_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `ADMIN_NAME` - Display name of the seeded administrator
//! - `ADMIN_EMAIL` - Email of the seeded administrator
//! - `ADMIN_PASSWORD` - Plaintext credential, hashed before storage
//! - `S3_BUCKET` - Bucket that receives product images
//!
//! ## Optional
//! - `S3_ENDPOINT` - Endpoint the S3 client talks to (default: `http://localhost:4566`)
//! - `S3_PUBLIC_ENDPOINT` - Base of rehosted image URLs (default: `S3_ENDPOINT`)
//! - `S3_REGION` - Bucket region (default: us-east-1)
//! - `S3_FORCE_PATH_STYLE` - Use `<endpoint>/<bucket>/<key>` addressing (default: true)
//! - `S3_ACCESS_KEY_ID` / `S3_SECRET_ACCESS_KEY` - Static credentials; the AWS
//!   default credential chain is used when either is unset
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use secrecy::SecretString;
use thiserror::Error;

/// Default endpoint, LocalStack's edge port.
pub const DEFAULT_S3_ENDPOINT: &str = "http://localhost:4566";
const DEFAULT_S3_REGION: &str = "us-east-1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Everything the startup seeder needs, read once at process start.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// Administrator account to create
    pub admin: AdminSeedConfig,
    /// Object storage for product images
    pub storage: StorageConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
}

/// Administrator identity to seed.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminSeedConfig {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl std::fmt::Debug for AdminSeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeedConfig")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// S3-compatible object storage configuration.
///
/// Implements `Debug` manually to redact the credentials.
#[derive(Clone)]
pub struct StorageConfig {
    /// Bucket that receives product images
    pub bucket: String,
    /// Endpoint used by the S3 client
    pub endpoint: String,
    /// Base URL that rehosted image URLs are built from
    pub public_endpoint: String,
    /// Bucket region
    pub region: String,
    /// Path-style addressing (required by LocalStack)
    pub force_path_style: bool,
    /// Static credentials, if configured
    pub credentials: Option<StaticCredentials>,
}

/// Static access key pair for the S3 client.
#[derive(Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .field("public_endpoint", &self.public_endpoint)
            .field("region", &self.region)
            .field("force_path_style", &self.force_path_style)
            .field(
                "credentials",
                &self.credentials.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl StorageConfig {
    /// Build the public URL of an object: `<public-endpoint>/<bucket>/<key>`.
    #[must_use]
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_endpoint.trim_end_matches('/'),
            self.bucket,
            key
        )
    }
}

impl SeedConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let database_url = env.database_url()?;

        let admin = AdminSeedConfig {
            name: env.required("ADMIN_NAME")?,
            email: env.required("ADMIN_EMAIL")?,
            password: SecretString::from(env.required("ADMIN_PASSWORD")?),
        };

        Ok(Self {
            database_url,
            admin,
            storage: StorageConfig::from_env(&env)?,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }
}

/// Load only the database URL, for commands that never touch storage.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if neither `SEED_DATABASE_URL` nor
/// `DATABASE_URL` is set.
pub fn database_url_from_env() -> Result<SecretString, ConfigError> {
    let _ = dotenvy::dotenv();

    Env(|key: &str| std::env::var(key).ok()).database_url()
}

impl StorageConfig {
    fn from_env<F>(env: &Env<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = env.or_default("S3_ENDPOINT", DEFAULT_S3_ENDPOINT);
        let public_endpoint = env
            .optional("S3_PUBLIC_ENDPOINT")
            .unwrap_or_else(|| endpoint.clone());

        let credentials = match (
            env.optional("S3_ACCESS_KEY_ID"),
            env.optional("S3_SECRET_ACCESS_KEY"),
        ) {
            (Some(access_key_id), Some(secret)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key: SecretString::from(secret),
            }),
            _ => None,
        };

        Ok(Self {
            bucket: env.required("S3_BUCKET")?,
            endpoint,
            public_endpoint,
            region: env.or_default("S3_REGION", DEFAULT_S3_REGION),
            force_path_style: env.bool_or_default("S3_FORCE_PATH_STYLE", true)?,
            credentials,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the usual required/optional/default accessors.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable. Empty values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.is_empty())
    }

    /// Get a required variable.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn database_url(&self) -> Result<SecretString, ConfigError> {
        self.optional("SEED_DATABASE_URL")
            .or_else(|| self.optional("DATABASE_URL"))
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("SEED_DATABASE_URL".to_string()))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    fn bool_or_default(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        self.optional(key).map_or(Ok(default), |value| {
            match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidEnvVar(
                    key.to_string(),
                    format!("expected a boolean, got '{value}'"),
                )),
            }
        })
    }
}
