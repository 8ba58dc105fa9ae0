//! Job Listing Extraction Library
//!
//! Turns scraped job-board pages into a deduplicated directory of hiring
//! companies. An LLM does the reading; this crate does everything around
//! it: prompting, tolerant parsing of the reply, merging results across
//! pages, and deriving filtered views such as the SDR report.
//!
//! # Usage
//!
//! ```rust,ignore
//! use job_extraction::{aggregate, analyze_batch, filter_directory, AnalyzeConfig, KeywordMatcher};
//! use job_extraction::stores::files::load_documents;
//! use job_extraction::testing::MockExtractor;
//!
//! let documents = load_documents("scraped_content".as_ref())?;
//! let extractor = MockExtractor::new();
//! let batch = analyze_batch(&extractor, documents, &AnalyzeConfig::default(), |_| Ok(())).await?;
//!
//! let directory = aggregate(&batch.analyses);
//! let sdr_view = filter_directory(&directory, &KeywordMatcher::sdr());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Black-box seams (Extractor, Ingestor)
//! - [`types`] - Records, outcomes, the aggregated directory, configs
//! - [`pipeline`] - Parse, analyze, aggregate, filter, scrape
//! - [`stores`] - Flat-file persistence (markdown, JSON, CSV)
//! - [`ingestors`] - Ingestor implementations (Firecrawl, mock)
//! - [`ai`] - Extractor implementations (OpenRouter)
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod ingestors;
pub mod pipeline;
pub mod security;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CrawlError, CrawlResult, ExtractionError, ParseFailure, Result};
pub use security::SecretString;
pub use traits::{
    extractor::Extractor,
    ingestor::{Ingestor, RawPage, ValidatedIngestor},
};
pub use types::{
    analysis::{AnalysisFailure, AnalysisOutcome, BatchResults, SourceAnalysis},
    company::{CompanyRecord, ExtractionPayload},
    config::{AnalyzeConfig, ScrapeConfig, DEFAULT_MAX_CONTENT_LENGTH},
    directory::{AggregatedDirectory, CompanyEntry},
    page::Document,
};

// Re-export pipeline components
pub use pipeline::{
    aggregate, analyze_batch, analyze_document, clean_filename, filter_directory,
    parse_extraction_response, parse_payload, scrape_urls, KeywordMatcher, ScrapeReport,
    TitlePredicate,
};

#[cfg(feature = "openrouter")]
pub use ai::OpenRouterExtractor;

pub use ingestors::MockIngestor;

#[cfg(feature = "firecrawl")]
pub use ingestors::FirecrawlIngestor;

pub use testing::MockExtractor;
