//! Analyze a single page and print what the model found.

use anyhow::{bail, Context, Result};
use clap::Args;
use job_extraction::{
    aggregate, analyze_document, AggregatedDirectory, AnalysisOutcome, AnalyzeConfig, Document,
    OpenRouterExtractor,
};
use std::path::PathBuf;

use crate::context::AppContext;

const TOP_COMPANIES: usize = 5;
const TITLES_SHOWN: usize = 3;

#[derive(Args)]
pub struct InspectArgs {
    /// Markdown file to analyze
    pub file: PathBuf,

    /// OpenRouter API key (overrides OPENROUTER_API_KEY)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,
}

pub async fn run(ctx: &AppContext, args: InspectArgs) -> Result<()> {
    let key = ctx.config.openrouter_key(args.api_key.as_deref())?;
    let mut extractor =
        OpenRouterExtractor::new(&key).context("Failed to create OpenRouter client")?;
    if let Some(model) = args.model {
        extractor = extractor.with_model(model);
    }

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let source_id = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    ctx.print_info(&format!("Analyzing {} with {}...", source_id, extractor.model()));
    let analysis = analyze_document(
        &extractor,
        &Document::new(source_id, content),
        &AnalyzeConfig::default(),
    )
    .await;

    if let AnalysisOutcome::Failure(failure) = &analysis.outcome {
        if let Some(raw) = &failure.raw_response {
            tracing::debug!(raw_response = %raw, "Unparsed extraction response");
        }
        bail!("Analysis failed: {}", failure.error);
    }

    let directory = aggregate(std::iter::once(&analysis));
    ctx.print_header("Analysis Result");
    for line in summary_lines(&directory) {
        ctx.print_line(&line);
    }
    Ok(())
}

fn summary_lines(directory: &AggregatedDirectory) -> Vec<String> {
    let mut lines = vec![format!(
        "Found {} companies with {} job listings",
        directory.total_companies, directory.total_jobs
    )];

    if directory.is_empty() {
        return lines;
    }

    lines.push(String::new());
    lines.push("Top Companies:".to_string());
    for (i, company) in directory.top(TOP_COMPANIES).iter().enumerate() {
        lines.push(format!(
            "{}. {} - {} job(s)",
            i + 1,
            company.name,
            company.job_count
        ));

        let shown: Vec<&str> = company
            .job_titles
            .iter()
            .take(TITLES_SHOWN)
            .map(String::as_str)
            .collect();
        lines.push(format!("   Job Titles: {}", shown.join(", ")));

        if company.job_titles.len() > TITLES_SHOWN {
            lines.push(format!(
                "   ... and {} more",
                company.job_titles.len() - TITLES_SHOWN
            ));
        }
    }
    lines
}
