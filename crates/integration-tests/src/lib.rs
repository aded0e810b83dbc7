//! Integration test support for Shop Seed.
//!
//! In-memory stand-ins for every seeder collaborator, plus a local HTTP
//! server that serves test images.
//!
//! # Running Tests
//!
//! ```bash
//! # Everything that needs no external services
//! cargo test -p shop-seed-integration-tests
//!
//! # Including the PostgreSQL tests
//! SEED_TEST_DATABASE_URL=postgres://localhost/shop_seed_test \
//!     cargo test -p shop-seed-integration-tests -- --include-ignored
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use chrono::Utc;
use secrecy::SecretString;
use tokio::io::AsyncWriteExt;

use shop_seed::config::{AdminSeedConfig, DEFAULT_S3_ENDPOINT, StorageConfig};
use shop_seed::db::{AdminUserStore, ProductStore, RepositoryError};
use shop_seed::images::{FetchError, ImageSource};
use shop_seed::models::{AdminUser, NewAdminUser, NewProduct, Product};
use shop_seed::services::{Argon2Hasher, CredentialHasher, HashError};
use shop_seed::{ImageRehoster, Seeder};
use shop_seed::storage::{ObjectStore, PutObject, StorageError};
use shop_seed_core::{AdminUserId, ProductId};

/// Body served for every reachable test image.
pub const IMAGE_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0 fake jpeg body \xFF\xD9";

/// Bucket used by [`storage_config`].
pub const TEST_BUCKET: &str = "product-images";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration pointing at the default local endpoint.
#[must_use]
pub fn storage_config() -> StorageConfig {
    StorageConfig {
        bucket: TEST_BUCKET.to_owned(),
        endpoint: DEFAULT_S3_ENDPOINT.to_owned(),
        public_endpoint: DEFAULT_S3_ENDPOINT.to_owned(),
        region: "us-east-1".to_owned(),
        force_path_style: true,
        credentials: None,
    }
}

/// The administrator identity used across tests.
#[must_use]
pub fn admin_config() -> AdminSeedConfig {
    AdminSeedConfig {
        name: "Store Owner".to_owned(),
        email: "owner@shop.test".to_owned(),
        password: SecretString::from("correct horse battery staple"),
    }
}

// =============================================================================
// Stores
// =============================================================================

/// Admin store that keeps inserted accounts in memory.
#[derive(Debug, Default)]
pub struct InMemoryAdminStore {
    users: Mutex<Vec<AdminUser>>,
    fail: bool,
}

impl InMemoryAdminStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every insert fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn users(&self) -> Vec<AdminUser> {
        lock(&self.users).clone()
    }
}

#[async_trait]
impl AdminUserStore for InMemoryAdminStore {
    async fn save(&self, user: NewAdminUser) -> Result<AdminUser, RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Conflict("app_user insert rejected".to_owned()));
        }

        let mut users = lock(&self.users);
        let id = i32::try_from(users.len() + 1).unwrap_or(i32::MAX);
        let saved = AdminUser::from_new(AdminUserId::new(id), Utc::now(), user);
        users.push(saved.clone());
        Ok(saved)
    }
}

/// Product store that keeps inserted products in memory.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: Mutex<Vec<Product>>,
    batches: Mutex<Vec<usize>>,
    fail: bool,
}

impl InMemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every batch insert fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        lock(&self.products).clone()
    }

    /// Size of each `save_all` call, in call order.
    #[must_use]
    pub fn batches(&self) -> Vec<usize> {
        lock(&self.batches).clone()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn save_all(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, RepositoryError> {
        lock(&self.batches).push(products.len());

        if self.fail {
            return Err(RepositoryError::Conflict("product batch rejected".to_owned()));
        }

        let mut stored = lock(&self.products);
        let now = Utc::now();
        let saved: Vec<Product> = products
            .into_iter()
            .map(|product| {
                let id = i32::try_from(stored.len() + 1).unwrap_or(i32::MAX);
                let saved = Product::from_new(ProductId::new(id), now, product);
                stored.push(saved.clone());
                saved
            })
            .collect();
        Ok(saved)
    }
}

// =============================================================================
// Object storage
// =============================================================================

/// One recorded upload.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub content_length: u64,
    /// File contents at upload time.
    pub body: Vec<u8>,
    /// Local file the body was read from.
    pub source_path: PathBuf,
}

/// Object store that records uploads in memory.
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<Vec<StoredObject>>,
    fail: bool,
}

impl InMemoryObjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that reads each body and then rejects the upload.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn objects(&self) -> Vec<StoredObject> {
        lock(&self.objects).clone()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put_object(&self, request: PutObject<'_>) -> Result<(), StorageError> {
        let body = tokio::fs::read(request.body)
            .await
            .map_err(|e| StorageError::Body(e.to_string()))?;

        if self.fail {
            return Err(StorageError::Request("bucket does not exist".to_owned()));
        }

        lock(&self.objects).push(StoredObject {
            bucket: request.bucket.to_owned(),
            key: request.key.to_owned(),
            content_type: request.content_type.to_owned(),
            content_length: request.content_length,
            body,
            source_path: request.body.to_path_buf(),
        });
        Ok(())
    }
}

// =============================================================================
// Image sources
// =============================================================================

/// Image source that serves [`IMAGE_BYTES`] for every URL except the failing ones.
#[derive(Debug, Default)]
pub struct StaticImageSource {
    failing: HashSet<String>,
    requested: Mutex<Vec<String>>,
}

impl StaticImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer 404 for each of `urls`.
    #[must_use]
    pub fn failing_for<'a>(urls: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            failing: urls.into_iter().map(str::to_owned).collect(),
            ..Self::default()
        }
    }

    /// Every URL requested so far, in order.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        lock(&self.requested).clone()
    }
}

#[async_trait]
impl ImageSource for StaticImageSource {
    async fn download(&self, url: &str, dest: &mut tokio::fs::File) -> Result<u64, FetchError> {
        lock(&self.requested).push(url.to_owned());

        if self.failing.contains(url) {
            return Err(FetchError::Status(404));
        }

        dest.write_all(IMAGE_BYTES).await?;
        Ok(IMAGE_BYTES.len() as u64)
    }
}

// =============================================================================
// Hashers
// =============================================================================

/// Hasher that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _plaintext: &SecretString) -> Result<String, HashError> {
        Err(HashError::Hash("salt generation failed".to_owned()))
    }
}

// =============================================================================
// Image server
// =============================================================================

/// A local HTTP server with a few fixed image routes.
///
/// - `/image.jpg` - 200 with [`IMAGE_BYTES`]
/// - `/missing.jpg` - 404
/// - `/broken.jpg` - 500
#[derive(Debug, Clone)]
pub struct ImageServer {
    base_url: String,
}

impl ImageServer {
    /// Bind to an ephemeral port and serve in the background.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        let app = Router::new()
            .route(
                "/image.jpg",
                get(|| async { ([(header::CONTENT_TYPE, "image/jpeg")], IMAGE_BYTES) }),
            )
            .route("/missing.jpg", get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/broken.jpg",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind image server");
        let addr = listener.local_addr().expect("image server address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// A URL on a local port with nothing listening.
///
/// # Panics
///
/// Panics if no ephemeral port can be bound.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);

    format!("http://{addr}/image.jpg")
}

/// Number of entries left in `dir`.
///
/// # Panics
///
/// Panics if `dir` cannot be read.
#[must_use]
pub fn entries_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).expect("read temp dir").count()
}

/// Shared handles to the fakes, so tests can inspect them after a run.
#[derive(Debug, Clone, Default)]
pub struct Fakes {
    pub admins: Arc<InMemoryAdminStore>,
    pub products: Arc<InMemoryProductStore>,
    pub objects: Arc<InMemoryObjectStore>,
    pub images: Arc<StaticImageSource>,
}

impl Fakes {
    /// A rehoster over these fakes, writing temporary files into `temp_dir`.
    #[must_use]
    pub fn rehoster(&self, temp_dir: &Path) -> ImageRehoster {
        ImageRehoster::new(self.images.clone(), self.objects.clone(), &storage_config())
            .with_temp_dir(temp_dir)
    }

    /// A seeder over these fakes using the real Argon2 hasher.
    #[must_use]
    pub fn seeder(&self, temp_dir: &Path) -> Seeder {
        Seeder::new(
            admin_config(),
            self.admins.clone(),
            self.products.clone(),
            Arc::new(Argon2Hasher),
            self.rehoster(temp_dir),
        )
    }
}
