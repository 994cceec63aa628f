use anyhow::Result;
use authorsearch_core::SearchField;
use authorsearch_core::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::search::{OutputFormat, SearchArgs};

#[derive(Parser)]
#[command(name = "authorsearch")]
#[command(about = "Search the Random House author directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search authors by a first or last name fragment
    Search {
        fragment: String,
        /// Name to match against: first or last
        #[arg(short, long, default_value = "first")]
        field: SearchField,
        #[arg(short, long, default_value_t = DEFAULT_OFFSET)]
        offset: u32,
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
        /// Include biography and work ids
        #[arg(short, long)]
        detail: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { fragment, field, offset, limit, detail, format } => {
            commands::search::run_search(SearchArgs { fragment, field, offset, limit, detail, format })
                .await?;
        },
    }

    Ok(())
}
