//! Analyze a directory of scraped pages.
//!
//! The batch file is rewritten after every document so an interrupted run
//! keeps everything analyzed so far. The aggregated directory is written
//! next to it when the batch finishes.

use anyhow::{bail, Context, Result};
use clap::Args;
use job_extraction::{
    aggregate, analyze_batch,
    stores::files::{aggregated_path_for, load_documents, write_batch, write_directory},
    AnalyzeConfig, OpenRouterExtractor,
};
use std::path::PathBuf;

use super::DEFAULT_BATCH_FILE;
use crate::context::AppContext;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Directory containing scraped markdown files
    #[arg(short, long, default_value = "scraped_content")]
    pub dir: PathBuf,

    /// Output file for batch results
    #[arg(short, long, default_value = DEFAULT_BATCH_FILE)]
    pub output: PathBuf,

    /// Analyze at most this many files (0 for all)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,

    /// OpenRouter API key (overrides OPENROUTER_API_KEY)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Pause between extraction calls, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,
}

pub async fn run(ctx: &AppContext, args: AnalyzeArgs) -> Result<()> {
    let key = ctx.config.openrouter_key(args.api_key.as_deref())?;
    let mut extractor =
        OpenRouterExtractor::new(&key).context("Failed to create OpenRouter client")?;
    if let Some(model) = args.model {
        extractor = extractor.with_model(model);
    }

    let documents = load_documents(&args.dir)
        .with_context(|| format!("Failed to load documents from {}", args.dir.display()))?;
    if documents.is_empty() {
        bail!("No markdown files found in {}", args.dir.display());
    }
    ctx.print_info(&format!(
        "Found {} markdown files in {}",
        documents.len(),
        args.dir.display()
    ));

    let config = AnalyzeConfig::new()
        .with_limit(args.limit)
        .with_request_delay_ms(args.delay_ms);
    if config.limit > 0 && config.limit < documents.len() {
        ctx.print_info(&format!("Limiting analysis to {} files", config.limit));
    }

    ctx.print_header(&format!("Analyzing with {}", extractor.model()));
    let batch = analyze_batch(&extractor, documents, &config, |partial| {
        write_batch(&args.output, partial)
    })
    .await
    .with_context(|| format!("Failed to save results to {}", args.output.display()))?;

    ctx.print_success(&format!(
        "Analyzed {} files ({} succeeded, {} failed); results saved to {}",
        batch.analyses.len(),
        batch.success_count(),
        batch.failure_count(),
        args.output.display()
    ));

    let directory = aggregate(&batch.analyses);
    let aggregated_path = aggregated_path_for(&args.output);
    write_directory(&aggregated_path, &directory)
        .with_context(|| format!("Failed to write {}", aggregated_path.display()))?;

    ctx.print_success(&format!(
        "Found {} companies with {} job listings; aggregated results saved to {}",
        directory.total_companies,
        directory.total_jobs,
        aggregated_path.display()
    ));

    Ok(())
}
