//! Swapi-Harvest main entry point
//!
//! This is the command-line interface for the Swapi-Harvest catalog ingester.

use clap::Parser;
use std::path::PathBuf;
use swapi_harvest::config::load_config;
use swapi_harvest::harvest::harvest;
use tracing_subscriber::EnvFilter;

/// Swapi-Harvest: an incremental SWAPI people ingester
///
/// Walks the numbered people catalog in fixed-size ID windows, denormalizes
/// every record's cross-references into joined display strings, and appends
/// the flattened documents to SQLite.
#[derive(Parser, Debug)]
#[command(name = "swapi-harvest")]
#[command(version)]
#[command(about = "Incremental SWAPI people ingester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics from the database and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_harvest(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("swapi_harvest=info,warn"),
            1 => EnvFilter::new("swapi_harvest=debug,info"),
            2 => EnvFilter::new("swapi_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the harvest plan
fn handle_dry_run(config: &swapi_harvest::config::Config) {
    println!("=== Swapi-Harvest Dry Run ===\n");

    println!("Catalog:");
    println!("  Base URL: {}", config.catalog.base_url);
    println!("  Window size: {}", config.catalog.window_size);

    println!("\nHTTP Client:");
    println!("  User agent: {}", config.client.user_agent);
    println!("  Timeout: {}s", config.client.timeout_seconds);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would harvest {}/people/{{id}} starting at id 1, {} ids per window",
        config.catalog.base_url, config.catalog.window_size
    );
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(
    config: &swapi_harvest::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::path::Path;
    use swapi_harvest::storage::{open_storage, Storage};

    println!("Database: {}\n", config.output.database_path);

    let storage = open_storage(Path::new(&config.output.database_path))?;

    let records = storage.load_all()?;
    println!("Stored records: {}", records.len());

    let catalog_ids: Vec<u64> = records.iter().filter_map(|r| r.catalog_id()).collect();
    if let (Some(min), Some(max)) = (catalog_ids.iter().min(), catalog_ids.iter().max()) {
        println!("Catalog id range: {} - {}", min, max);
    }

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(
    config: swapi_harvest::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Harvesting {} into {}",
        config.catalog.base_url,
        config.output.database_path
    );

    match harvest(config).await {
        Ok(report) => {
            tracing::info!(
                "Done: {} records across {} windows (probed ids 1 - {})",
                report.records_harvested,
                report.windows_dispatched,
                report.last_probed_id
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
