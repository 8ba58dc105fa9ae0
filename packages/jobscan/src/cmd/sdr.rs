use anyhow::{bail, Context, Result};
use clap::Args;
use job_extraction::{
    filter_directory,
    stores::files::{export_csv, read_directory, CsvLabels},
    KeywordMatcher,
};
use std::path::PathBuf;

use super::DEFAULT_AGGREGATED_FILE;
use crate::context::AppContext;

#[derive(Args)]
pub struct SdrArgs {
    /// Aggregated directory file
    #[arg(short, long, default_value = DEFAULT_AGGREGATED_FILE)]
    pub input: PathBuf,

    /// CSV output file
    #[arg(short, long, default_value = "sdr_companies.csv")]
    pub output: PathBuf,
}

pub fn run(ctx: &AppContext, args: SdrArgs) -> Result<()> {
    let directory = read_directory(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    if directory.is_empty() {
        bail!("No companies found in {}", args.input.display());
    }

    let view = filter_directory(&directory, &KeywordMatcher::sdr());
    export_csv(&args.output, &view, &CsvLabels::sdr())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if view.is_empty() {
        ctx.print_warning("No companies with SDR-related job titles");
    }
    ctx.print_success(&format!(
        "Extracted SDR companies to {}",
        args.output.display()
    ));
    ctx.print_line(&format!(
        "Found {} companies with SDR-related job titles ({} listings)",
        view.total_companies, view.total_jobs
    ));
    Ok(())
}
