mod find;
mod history;
mod input;
mod present;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::input::InputArgs;

#[derive(Debug, Parser)]
#[command(name = "shopfinder-cli")]
#[command(about = "Identify a product and find local shops that carry it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Identify a product from a description or an image
    Identify {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Identify a product, then search for shops near a location
    Find {
        #[command(flatten)]
        input: InputArgs,
        /// Where to search, e.g. "Austin, TX"
        #[arg(long)]
        location: Option<String>,
    },
    /// Show recent searches
    History {
        /// Maximum number of searches to show
        #[arg(long, default_value = "10")]
        limit: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = shopfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Identify { input } => find::run_identify(&input).await,
        Commands::Find { input, location } => {
            find::run_find(&config, &input, location.as_deref()).await
        }
        Commands::History { limit } => history::run_history(&config, limit).await,
    }
}
