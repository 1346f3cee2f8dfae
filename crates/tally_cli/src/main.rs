//! Tally CLI
//!
//! Command-line tools for Tally ledgers.
//!
//! # Commands
//!
//! - `demo` - Run the ledger and transfer walkthrough against an in-memory store
//! - `show` - Print a CSV ledger file
//! - `record` - Record a movement in a CSV ledger file
//! - `verify` - Check that a CSV ledger file decodes and balances

mod commands;
mod config;
mod error;

use clap::{Parser, Subcommand};
use config::DemoConfig;
use std::path::PathBuf;
use tally_store::{Keyspace, DEFAULT_BUCKET, DEFAULT_NAME};
use tracing_subscriber::EnvFilter;

/// Tally ledger tools.
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (also enabled by VERBOSE=yes|y|on|true|1)
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the ledger and transfer walkthrough against an in-memory store
    Demo {
        /// Bucket name
        #[arg(long, env = "BUCKET_NAME", default_value = DEFAULT_BUCKET)]
        bucket: String,

        /// Scope name
        #[arg(long, env = "SCOPE_NAME", default_value = DEFAULT_NAME)]
        scope: String,

        /// Collection name
        #[arg(long, env = "COLLECTION_NAME", default_value = DEFAULT_NAME)]
        collection: String,

        /// Maximum attempts per transaction
        #[arg(long, default_value = "10")]
        max_attempts: u32,
    },

    /// Print a CSV ledger file
    Show {
        /// Ledger file
        file: PathBuf,

        /// Output format (text, json, csv)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Record a movement in a CSV ledger file
    Record {
        /// Ledger file, created if missing
        file: PathBuf,

        /// Date of the movement
        #[arg(long)]
        date: String,

        /// Account credited
        #[arg(long)]
        from: String,

        /// Account debited
        #[arg(long)]
        to: String,

        /// Amount moved
        #[arg(long)]
        amount: u64,

        /// Description
        #[arg(short, long)]
        description: String,
    },

    /// Check that a CSV ledger file decodes and balances
    Verify {
        /// Ledger file
        file: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let verbose = cli.verbose || config::verbose_from_env();

    // Initialize logging
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Demo {
            bucket,
            scope,
            collection,
            max_attempts,
        } => {
            let config = DemoConfig {
                keyspace: Keyspace::new()
                    .bucket(bucket)
                    .scope(scope)
                    .collection(collection),
                max_attempts,
                verbose,
            };
            commands::demo::run(&config)?;
        }
        Commands::Show { file, format } => {
            commands::show::run(&file, &format)?;
        }
        Commands::Record {
            file,
            date,
            from,
            to,
            amount,
            description,
        } => {
            commands::record::run(&file, &date, &from, &to, amount, &description)?;
        }
        Commands::Verify { file } => {
            commands::verify::run(&file)?;
        }
        Commands::Version => {
            println!("Tally CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
