//! bricktime CLI - Construction-set assembly time estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "bricktime")]
#[command(about = "Construction-set assembly time estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate assembly time for a single build
    #[command(allow_negative_numbers = true)]
    Estimate {
        /// Total number of pieces in the set
        pieces: i64,

        /// Number of people building simultaneously
        builders: i64,
    },

    /// Estimate a batch of requests supplied as a JSON array
    Batch {
        /// Input file with a JSON array of requests (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the JSON array of responses (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate { pieces, builders } => commands::estimate::estimate(pieces, builders),
        Commands::Batch {
            input,
            output,
            pretty,
        } => commands::batch::batch(input.as_deref(), output.as_deref(), pretty),
    }
}
