//! SeoCalc CLI - Estimate SEO project costs
//!
//! A command-line tool for browsing the service catalog, producing
//! one-shot quotes, and running an interactive pricing session.

mod commands;
mod logging;
mod tui;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seocalc")]
#[command(author, version, about = "Estimate SEO project costs")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Disable interactive TUI mode
    #[arg(long, global = true)]
    no_tui: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the service catalog
    #[command(alias = "ls")]
    Services {
        /// Filter by category (optimization, content, off-page, local, analytics)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Compute a one-shot quote
    Quote(QuoteArgs),
}

#[derive(Args)]
struct QuoteArgs {
    /// Service selection as ID=QTY (repeatable), e.g. -s on-page-seo=2
    #[arg(short = 's', long = "service", value_name = "ID=QTY")]
    services: Vec<String>,

    /// Project duration in months (3-24)
    #[arg(short, long, default_value_t = 6)]
    duration: u32,

    /// Competition level (low, medium, high)
    #[arg(short, long, default_value = "medium")]
    competition: String,

    /// Business size (small, medium, enterprise)
    #[arg(short, long, default_value = "small")]
    business_size: String,

    /// Number of target geographies (1-10)
    #[arg(short, long, default_value_t = 1)]
    geographies: u32,

    /// Include the monthly management retainer
    #[arg(short, long)]
    retainer: bool,

    /// Write the result JSON into a directory (defaults to the current one)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    export: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Services { category }) => {
            logging::init(cli.verbose);
            commands::services::run(category, cli.json)?;
        }
        Some(Commands::Quote(args)) => {
            logging::init(cli.verbose);
            commands::quote::run(args, cli.json).await?;
        }
        None => {
            // Default: launch the interactive session, or list the catalog
            // when not attached to a terminal.
            if cli.no_tui || !atty::is(atty::Stream::Stdout) {
                logging::init(cli.verbose);
                commands::services::run(None, cli.json)?;
            } else {
                tui::run().await?;
            }
        }
    }

    Ok(())
}
