//! InsightBoard Loader CLI
//!
//! Imports a JSON array of records into the InsightBoard store.

// CLI tool - relax pedantic lints for ergonomics
#![allow(clippy::pedantic)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use insightboard_core::InsightConfig;
use insightboard_loader::{LoadOptions, LoadPipeline, LoadStats};

#[derive(Parser)]
#[command(name = "insightboard-load")]
#[command(version)]
#[command(about = "Load a JSON array of records into the InsightBoard store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON input file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true, value_name = "FILE", env = "INSIGHTBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database URL override
    #[arg(long, global = true, env = "INSIGHTBOARD_DATABASE_URL")]
    database_url: Option<String>,

    /// Dry run mode (parse and normalize, don't write to the store)
    #[arg(long, global = true)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a file, replacing the store contents
    Run {
        /// JSON input file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Parse and normalize a file without touching the store
    Validate {
        /// JSON input file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Generate a default configuration file
    Init {
        /// Output file path
        #[arg(short, long, default_value = "insightboard.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match &cli.command {
        Some(Commands::Run { input }) => {
            run_load(&cli, input, cli.dry_run).await?;
        }
        Some(Commands::Validate { input }) => {
            run_load(&cli, input, true).await?;
        }
        Some(Commands::Init { output }) => {
            generate_config(output)?;
        }
        None => {
            // Default: load the positional file
            if let Some(input) = &cli.input {
                run_load(&cli, input, cli.dry_run).await?;
            } else {
                eprintln!("Usage: insightboard-load <FILE> or insightboard-load <COMMAND>");
                eprintln!("Try 'insightboard-load --help' for more information.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<InsightConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            InsightConfig::load_from_path(path)?
        }
        None => InsightConfig::load()?,
    };

    if let Some(url) = &cli.database_url {
        config.storage.database_url = url.clone();
    }

    config.validate()?;
    Ok(config)
}

async fn run_load(cli: &Cli, input: &Path, dry_run: bool) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;

    let mut options = LoadOptions::new(input, config.storage.clone());
    options.dry_run = dry_run;
    options.show_progress = true;

    info!("Starting load...");

    let stats = LoadPipeline::new(options).run().await?;

    if dry_run {
        println!("\n✅ Input is valid (dry run, store untouched)");
    } else {
        println!("\n✅ Load Complete!");
        println!("   Database:  {}", config.storage.database_url);
    }
    print_report(&stats);

    Ok(())
}

fn print_report(stats: &LoadStats) {
    println!("   Parsed:        {}", stats.parsed);
    println!("   Loaded:        {}", stats.loaded);
    println!("   SWOT derived:  {}", stats.swot_derived);
    println!("   Coerced nulls: {}", stats.coerced_nulls);
    println!("   Duration:      {:.2}s", stats.duration_secs);
    println!("   Throughput:    {:.0} records/sec", stats.throughput());
}

fn generate_config(output: &Path) -> anyhow::Result<()> {
    InsightConfig::default().write_to_path(output)?;
    println!("✅ Generated configuration: {:?}", output);
    println!(
        "   Edit the file and run: insightboard-load run --config {:?} --input <FILE>",
        output
    );

    Ok(())
}
