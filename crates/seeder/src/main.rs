//! `shop-seed` - populate a fresh shop database on startup.
//!
//! Reads configuration from the environment (and `.env`), applies pending
//! migrations, then seeds the administrator and the sample catalog.
//! Exits with status 1 if configuration, the database, or the admin insert
//! fails. Image rehosting problems never fail the run.

#![cfg_attr(not(test), forbid(unsafe_code))]

use shop_seed::db;
use shop_seed::telemetry::{DEFAULT_LOG_FILTER, init_sentry, init_tracing};
use shop_seed::{SeedConfig, SeedError, Seeder};

#[tokio::main]
async fn main() {
    let config = SeedConfig::from_env();

    // Sentry must be initialized before the tracing subscriber
    let sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing(DEFAULT_LOG_FILTER);

    let result = match config {
        Ok(config) => run(&config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Database initialization failed");
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(config: &SeedConfig) -> Result<(), SeedError> {
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Migrations applied");

    let seeder = Seeder::connect(config, pool).await;
    seeder.run().await?;
    Ok(())
}
