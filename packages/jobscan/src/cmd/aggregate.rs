use anyhow::{Context, Result};
use clap::Args;
use job_extraction::{
    aggregate,
    stores::files::{aggregated_path_for, read_batch, write_directory},
};
use std::path::PathBuf;

use super::DEFAULT_BATCH_FILE;
use crate::context::AppContext;

#[derive(Args)]
pub struct AggregateArgs {
    /// Batch results file
    #[arg(short, long, default_value = DEFAULT_BATCH_FILE)]
    pub input: PathBuf,

    /// Output file (default: <input>_aggregated.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: AggregateArgs) -> Result<()> {
    let batch = read_batch(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let directory = aggregate(&batch.analyses);
    let output = args
        .output
        .unwrap_or_else(|| aggregated_path_for(&args.input));
    write_directory(&output, &directory)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if batch.failure_count() > 0 {
        ctx.print_warning(&format!(
            "Skipped {} failed analyses",
            batch.failure_count()
        ));
    }
    ctx.print_success(&format!(
        "Found {} companies with {} job listings; saved to {}",
        directory.total_companies,
        directory.total_jobs,
        output.display()
    ));

    Ok(())
}
