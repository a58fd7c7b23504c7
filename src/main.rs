mod cli;
mod config;
mod db;
mod error;
mod graph;
mod recall;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engram", version, about = "Long-term memory for conversational agents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show counts and sizes for both stores
    Stats,
    /// Run a scored recall query
    Search {
        /// Query text
        query: String,
        /// Maximum results to return
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
    },
    /// Print the memory block that would be injected for a query
    Context {
        /// Query text
        query: String,
    },
    /// Export an entity as Obsidian-compatible markdown
    Export {
        /// Entity name (case-insensitive)
        name: String,
    },
    /// Remove old, unimportant, rarely-accessed facts
    Cleanup,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level and db path)
    let config = config::EngramConfig::load()?;

    // Log to stderr so stdout stays clean for command output.
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Stats => cli::stats::stats(&config),
        Command::Search { query, max_results } => cli::search::search(&config, &query, max_results),
        Command::Context { query } => cli::context::context(&config, &query),
        Command::Export { name } => cli::export::export(&config, &name),
        Command::Cleanup => cli::cleanup::cleanup(&config),
    }
}
