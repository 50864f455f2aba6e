//! Command-line interface for nest-seed
//!
//! # Usage Examples
//!
//! ```bash
//! export SEED_API_URL=https://project.example.co
//! export SEED_API_KEY=...
//!
//! # Activity logs for the last 180 days, 200 records per request
//! nest-seed logs --config seed.yaml
//!
//! # Same data every time
//! nest-seed logs --config seed.yaml --seed 42 --days 30
//!
//! # Household finance, devices, notes, tasks and events
//! nest-seed household --config seed.yaml
//!
//! # Member accounts and activity type definitions
//! nest-seed members --config seed.yaml
//! nest-seed catalog --config seed.yaml
//!
//! # Offline
//! nest-seed export --config seed.yaml --output-dir out/
//! nest-seed validate --config seed.yaml --compare other.yaml
//! ```

use clap::{Parser, Subcommand};
use nest_seed::commands::{catalog, export, household, logs, members, validate};
use nest_seed::ValidateArgs;
use seed_populate_jsonl::JsonlExportArgs;
use seed_populate_rest::RestPopulateArgs;

#[derive(Parser)]
#[command(name = "nest-seed")]
#[command(about = "Seed a REST backend with synthetic baby-care and household data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit back-dated activity logs for every configured subject
    Logs {
        #[command(flatten)]
        args: RestPopulateArgs,
    },

    /// Submit finance, device, note, task and calendar rows for the household
    Household {
        #[command(flatten)]
        args: RestPopulateArgs,
    },

    /// Sign up the configured member accounts
    Members {
        #[command(flatten)]
        args: RestPopulateArgs,
    },

    /// Insert or update activity type definitions
    Catalog {
        #[command(flatten)]
        args: RestPopulateArgs,
    },

    /// Write generated logs and household rows to JSON Lines files
    Export {
        #[command(flatten)]
        args: JsonlExportArgs,
    },

    /// Print category tables and report malformed or drifted identifiers
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing, defaulting to info
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Logs { args } => logs::run_logs(args, today).await?,
        Commands::Household { args } => household::run_household(args, today).await?,
        Commands::Members { args } => members::run_members(args).await?,
        Commands::Catalog { args } => catalog::run_catalog(args).await?,
        Commands::Export { args } => {
            export::run_export(args, today)?;
        }
        Commands::Validate { args } => {
            validate::run_validate(args)?;
        }
    }

    Ok(())
}
