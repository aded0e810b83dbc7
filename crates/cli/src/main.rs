//! Shop Seed CLI - migrations and partial seeding runs.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! seed-cli migrate
//!
//! # Seed the administrator and the catalog (same as the shop-seed binary)
//! seed-cli seed
//!
//! # Seed only one phase
//! seed-cli seed admin
//! seed-cli seed catalog
//!
//! # Print the fixed catalog as JSON
//! seed-cli catalog
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use shop_seed::telemetry::{DEFAULT_LOG_FILTER, init_tracing};

mod commands;

#[derive(Parser)]
#[command(name = "seed-cli")]
#[command(author, version, about = "Shop Seed CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate,
    /// Seed the database
    Seed {
        /// Which phase to run
        #[arg(value_enum, default_value_t = SeedPhase::All)]
        phase: SeedPhase,

        /// Directory for temporary image files (default: system temp dir)
        #[arg(long)]
        temp_dir: Option<std::path::PathBuf>,
    },
    /// Print the fixed sample catalog as JSON
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum SeedPhase {
    /// Administrator, then catalog
    All,
    /// Administrator only
    Admin,
    /// Catalog only
    Catalog,
}

#[tokio::main]
async fn main() {
    init_tracing(DEFAULT_LOG_FILTER);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { phase, temp_dir } => match phase {
            SeedPhase::All => commands::seed::all(temp_dir).await?,
            SeedPhase::Admin => commands::seed::admin().await?,
            SeedPhase::Catalog => commands::seed::catalog(temp_dir).await?,
        },
        Commands::Catalog => commands::catalog::print()?,
    }
    Ok(())
}
