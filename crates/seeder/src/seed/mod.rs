//! Startup seeding.
//!
//! # Phases
//!
//! 1. [`admin`] - Insert one administrator with a hashed password
//! 2. [`catalog`] - Rehost each product image, then insert the whole catalog
//!
//! The admin phase runs first; if it fails, the catalog is never touched.
//! Nothing checks for existing rows, so running twice duplicates everything.

pub mod admin;
pub mod catalog;
pub mod catalog_data;
pub mod rehost;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::{AdminSeedConfig, SeedConfig};
use crate::db::{AdminUserStore, PgAdminUserStore, PgProductStore, ProductStore};
use crate::error::SeedError;
use crate::images::HttpImageSource;
use crate::models::{AdminUser, ProductDescriptor};
use crate::services::{Argon2Hasher, CredentialHasher};
use crate::storage::S3ObjectStore;

pub use admin::{build_admin, seed_admin};
pub use catalog::{CatalogReport, SEED_STOCK, build_product, seed_catalog};
pub use catalog_data::CATALOG;
pub use rehost::{ImageRehoster, RehostError, RehostOutcome};

/// Result of a full seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub admin: AdminUser,
    pub catalog: CatalogReport,
}

/// Runs both seeding phases against its collaborators.
#[derive(Clone)]
pub struct Seeder {
    admin_store: Arc<dyn AdminUserStore>,
    product_store: Arc<dyn ProductStore>,
    hasher: Arc<dyn CredentialHasher>,
    rehoster: ImageRehoster,
    admin: AdminSeedConfig,
    catalog: Vec<ProductDescriptor>,
}

impl std::fmt::Debug for Seeder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seeder")
            .field("rehoster", &self.rehoster)
            .field("admin", &self.admin)
            .field("catalog", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl Seeder {
    /// Create a seeder for the fixed [`CATALOG`].
    #[must_use]
    pub fn new(
        admin: AdminSeedConfig,
        admin_store: Arc<dyn AdminUserStore>,
        product_store: Arc<dyn ProductStore>,
        hasher: Arc<dyn CredentialHasher>,
        rehoster: ImageRehoster,
    ) -> Self {
        Self {
            admin_store,
            product_store,
            hasher,
            rehoster,
            admin,
            catalog: CATALOG.to_vec(),
        }
    }

    /// Wire up the production collaborators: `PostgreSQL`, Argon2, HTTP, and S3.
    pub async fn connect(config: &SeedConfig, pool: PgPool) -> Self {
        let store = S3ObjectStore::from_config(&config.storage).await;
        let rehoster = ImageRehoster::new(
            Arc::new(HttpImageSource::new()),
            Arc::new(store),
            &config.storage,
        );

        Self::new(
            config.admin.clone(),
            Arc::new(PgAdminUserStore::new(pool.clone())),
            Arc::new(PgProductStore::new(pool)),
            Arc::new(Argon2Hasher),
            rehoster,
        )
    }

    /// Seed a different product list.
    #[must_use]
    pub fn with_catalog(mut self, catalog: impl Into<Vec<ProductDescriptor>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Create temporary image files in `dir`.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.rehoster = self.rehoster.with_temp_dir(dir);
        self
    }

    /// The products this seeder will insert.
    #[must_use]
    pub fn catalog(&self) -> &[ProductDescriptor] {
        &self.catalog
    }

    /// Run only the admin phase.
    ///
    /// # Errors
    ///
    /// See [`seed_admin`].
    pub async fn seed_admin(&self) -> Result<AdminUser, SeedError> {
        seed_admin(self.admin_store.as_ref(), self.hasher.as_ref(), &self.admin).await
    }

    /// Run only the catalog phase.
    ///
    /// # Errors
    ///
    /// See [`seed_catalog`].
    pub async fn seed_catalog(&self) -> Result<CatalogReport, SeedError> {
        seed_catalog(self.product_store.as_ref(), &self.rehoster, &self.catalog).await
    }

    /// Run the admin phase, then the catalog phase.
    ///
    /// # Errors
    ///
    /// Returns the first phase error; a failed admin insert skips the catalog.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        info!("Starting database initialization");

        let admin = self.seed_admin().await?;
        let catalog = self.seed_catalog().await?;

        info!(
            admin_id = %admin.id,
            products = catalog.products.len(),
            rehosted = catalog.rehosted,
            fell_back = catalog.fell_back,
            "Database initialization completed"
        );
        Ok(SeedReport { admin, catalog })
    }
}
