//! jobscan: scrape job boards, extract hiring companies, build reports.
//!
//! Typical flow:
//!
//! ```text
//! jobscan scrape --csv sdr_urls.csv
//! jobscan analyze --dir scraped_content
//! jobscan export
//! jobscan sdr
//! ```

mod cmd;
mod config;
mod context;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::context::AppContext;

#[derive(Parser)]
#[command(name = "jobscan")]
#[command(about = "Scrape job boards and build hiring-company reports")]
struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape URLs to markdown files
    Scrape(cmd::scrape::ScrapeArgs),

    /// Extract companies from scraped pages and aggregate them
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Re-aggregate an existing batch results file
    Aggregate(cmd::aggregate::AggregateArgs),

    /// Export the aggregated directory as CSV
    Export(cmd::export::ExportArgs),

    /// Export companies hiring for SDR/BDR roles as CSV
    Sdr(cmd::sdr::SdrArgs),

    /// Analyze one page and print the top companies
    Inspect(cmd::inspect::InspectArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_extraction=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.quiet, Config::from_env()?);

    match cli.command {
        Commands::Scrape(args) => cmd::scrape::run(&ctx, args).await,
        Commands::Analyze(args) => cmd::analyze::run(&ctx, args).await,
        Commands::Aggregate(args) => cmd::aggregate::run(&ctx, args),
        Commands::Export(args) => cmd::export::run(&ctx, args),
        Commands::Sdr(args) => cmd::sdr::run(&ctx, args),
        Commands::Inspect(args) => cmd::inspect::run(&ctx, args).await,
    }
}
