pub mod aggregate;
pub mod analyze;
pub mod export;
pub mod inspect;
pub mod scrape;
pub mod sdr;

/// Default batch results file.
pub const DEFAULT_BATCH_FILE: &str = "company_analysis.json";

/// Default aggregated directory file.
pub const DEFAULT_AGGREGATED_FILE: &str = "company_analysis_aggregated.json";
