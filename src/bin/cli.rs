//! Club crawler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use club_crawler::{
    error::Result,
    models::{Config, EnrichedClub},
    pipeline,
    storage::LocalSink,
};

/// club-crawler - Football club contact finder
#[derive(Parser, Debug)]
#[command(
    name = "club-crawler",
    version,
    about = "Find football clubs around coordinates and extract their main contact"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search clubs around every coordinate and append results
    Run {
        /// Coordinate CSV (default: paths.input)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file, opened in append mode (default: paths.output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of data rows to skip, to resume an interrupted run
        #[arg(long, default_value_t = 0)]
        skip: u64,
    },

    /// Validate configuration file
    Validate,

    /// Show what an output file contains so far
    Info {
        /// Output file (default: paths.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Run {
            input,
            output,
            skip,
        } => {
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            let input = input.unwrap_or_else(|| config.paths.input.clone());
            let output = output.unwrap_or_else(|| config.paths.output.clone());
            pipeline::run_crawler(&config, &input, &output, skip).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("  Search endpoint: {}", config.search.endpoint);
            log::info!("  Radius: {} km", config.search.radius);
            log::info!(
                "  Licence filters: {} / {}",
                config.search.licence_type1.join(","),
                config.search.licence_type2.join(",")
            );
            log::info!("  Max concurrent: {}", config.crawler.max_concurrent);
        }

        Command::Info { output } => {
            let output = output.unwrap_or_else(|| config.paths.output.clone());
            let batches: Vec<Vec<EnrichedClub>> = LocalSink::load_batches(&output).await?;

            let clubs: usize = batches.iter().map(Vec::len).sum();
            let with_email = batches
                .iter()
                .flatten()
                .filter(|club| club.main_email.is_some())
                .count();
            let empty = batches.iter().filter(|batch| batch.is_empty()).count();

            log::info!("Output: {}", output.display());
            log::info!("Batches: {} ({} empty)", batches.len(), empty);
            log::info!("Clubs: {} ({} with main email)", clubs, with_email);
        }
    }

    log::info!("Done!");

    Ok(())
}
