//! Scrape job-board URLs to markdown via Firecrawl.

use anyhow::{bail, Context, Result};
use clap::Args;
use job_extraction::{
    scrape_urls,
    stores::files::{read_urls_from_csv, read_urls_from_text},
    FirecrawlIngestor, ScrapeConfig, ValidatedIngestor,
};
use std::path::PathBuf;

use crate::context::AppContext;

#[derive(Args)]
pub struct ScrapeArgs {
    /// URLs to scrape
    pub urls: Vec<String>,

    /// Text file with one URL per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// CSV file with a `url` column
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Directory to save the markdown files in
    #[arg(short, long, default_value = "scraped_content")]
    pub output_dir: PathBuf,

    /// Pause between requests, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Firecrawl API key (overrides FIRECRAWL_API_KEY)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,
}

fn collect_urls(args: &ScrapeArgs) -> Result<Vec<String>> {
    let mut urls = args.urls.clone();

    if let Some(path) = &args.file {
        urls.extend(
            read_urls_from_text(path)
                .with_context(|| format!("Failed to read URLs from {}", path.display()))?,
        );
    }
    if let Some(path) = &args.csv {
        urls.extend(
            read_urls_from_csv(path)
                .with_context(|| format!("Failed to read URLs from {}", path.display()))?,
        );
    }

    Ok(urls)
}

pub async fn run(ctx: &AppContext, args: ScrapeArgs) -> Result<()> {
    let urls = collect_urls(&args)?;
    if urls.is_empty() {
        bail!("No URLs given (pass URLs, --file or --csv)");
    }

    let key = ctx.config.firecrawl_key(args.api_key.as_deref())?;
    let ingestor = ValidatedIngestor::new(
        FirecrawlIngestor::new(key).context("Failed to create Firecrawl client")?,
    );
    let config = ScrapeConfig::new()
        .with_output_dir(args.output_dir)
        .with_request_delay_ms(args.delay_ms);

    ctx.print_header(&format!("Scraping {} URL(s)", urls.len()));
    let report = scrape_urls(&ingestor, &urls, &config).await;

    ctx.print_header("Scraping Summary");
    ctx.print_line(&format!(
        "Successfully scraped {}/{} URLs into {}",
        report.success_count(),
        urls.len(),
        config.output_dir.display()
    ));

    if report.all_succeeded() {
        ctx.print_success("All URLs scraped");
        return Ok(());
    }

    ctx.print_warning("Failed URLs:");
    for outcome in report.failed() {
        if let job_extraction::pipeline::ScrapeStatus::Failed(reason) = &outcome.status {
            ctx.print_line(&format!("- {} ({})", outcome.url, reason));
        }
    }
    bail!(
        "{} of {} URLs failed to scrape",
        report.failure_count(),
        urls.len()
    )
}
