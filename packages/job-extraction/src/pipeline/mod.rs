//! The analysis pipeline.
//!
//! scrape → analyze (extract + parse, per document) → aggregate → filter.
//! Everything after the extractor call is pure and never fails on
//! malformed input; bad responses are carried forward as failure outcomes.

pub mod aggregate;
pub mod analyze;
pub mod filter;
pub mod pacing;
pub mod parse;
pub mod prompts;
pub mod scrape;

pub use aggregate::aggregate;
pub use analyze::{analyze_batch, analyze_document};
pub use filter::{filter_directory, KeywordMatcher, TitlePredicate, SDR_KEYWORDS};
pub use pacing::Pacer;
pub use parse::{locate_json, parse_extraction_response, parse_payload};
pub use prompts::{format_extract_prompt, truncate_content, EXTRACT_PROMPT, TRUNCATION_MARKER};
pub use scrape::{clean_filename, scrape_urls, ScrapeOutcome, ScrapeReport, ScrapeStatus};
