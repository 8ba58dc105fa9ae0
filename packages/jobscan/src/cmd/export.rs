use anyhow::{bail, Context, Result};
use clap::Args;
use job_extraction::stores::files::{export_csv, read_directory, CsvLabels};
use std::path::PathBuf;

use super::DEFAULT_AGGREGATED_FILE;
use crate::context::AppContext;

#[derive(Args)]
pub struct ExportArgs {
    /// Aggregated directory file
    #[arg(short, long, default_value = DEFAULT_AGGREGATED_FILE)]
    pub input: PathBuf,

    /// CSV output file
    #[arg(short, long, default_value = "company_analysis.csv")]
    pub output: PathBuf,
}

pub fn run(ctx: &AppContext, args: ExportArgs) -> Result<()> {
    let directory = read_directory(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    if directory.is_empty() {
        bail!("No companies found in {}", args.input.display());
    }

    export_csv(&args.output, &directory, &CsvLabels::all_jobs())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    ctx.print_success(&format!(
        "Converted {} to {}",
        args.input.display(),
        args.output.display()
    ));
    ctx.print_line(&format!("Wrote data for {} companies", directory.len()));
    Ok(())
}
