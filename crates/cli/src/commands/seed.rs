//! Seeding commands.
//!
//! These run the same phases as the `shop-seed` binary, but never apply
//! migrations; run `seed-cli migrate` first on a fresh database.
//!
//! # Environment Variables
//!
//! See `shop_seed::config` for the full list.

use std::path::PathBuf;

use tracing::info;

use shop_seed::{SeedConfig, SeedError, Seeder, db};

async fn connect(temp_dir: Option<PathBuf>) -> Result<Seeder, SeedError> {
    let config = SeedConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    info!("Connected to database");

    let seeder = Seeder::connect(&config, pool).await;
    Ok(match temp_dir {
        Some(dir) => seeder.with_temp_dir(dir),
        None => seeder,
    })
}

/// Seed the administrator, then the catalog.
///
/// # Errors
///
/// Returns an error if configuration, the connection, or either phase fails.
pub async fn all(temp_dir: Option<PathBuf>) -> Result<(), SeedError> {
    connect(temp_dir).await?.run().await?;
    Ok(())
}

/// Seed only the administrator.
///
/// # Errors
///
/// Returns an error if configuration, the connection, or the insert fails.
pub async fn admin() -> Result<(), SeedError> {
    let admin = connect(None).await?.seed_admin().await?;

    info!("Seeding complete!");
    info!("  Admin ID: {}", admin.id);
    info!("  Email: {}", admin.email);
    Ok(())
}

/// Seed only the catalog.
///
/// # Errors
///
/// Returns an error if configuration, the connection, or the batch insert fails.
pub async fn catalog(temp_dir: Option<PathBuf>) -> Result<(), SeedError> {
    let report = connect(temp_dir).await?.seed_catalog().await?;

    info!("Seeding complete!");
    info!("  Products inserted: {}", report.products.len());
    info!("  Images rehosted: {}", report.rehosted);
    info!("  Images kept at source: {}", report.fell_back);
    Ok(())
}
