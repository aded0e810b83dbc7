//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! seed-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `SEED_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! `crates/seeder/migrations/`

use shop_seed::SeedError;
use shop_seed::config::database_url_from_env;
use shop_seed::db;

/// Apply every pending migration.
///
/// # Errors
///
/// Returns an error if the URL is missing, the connection fails, or a
/// migration fails.
pub async fn run() -> Result<(), SeedError> {
    let database_url = database_url_from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
