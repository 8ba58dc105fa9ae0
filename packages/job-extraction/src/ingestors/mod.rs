//! Ingestor implementations for job-listing pages.
//!
//! # Available Ingestors
//!
//! - `FirecrawlIngestor` - Firecrawl API (requires `firecrawl` feature)
//! - `MockIngestor` - For testing

mod mock;

#[cfg(feature = "firecrawl")]
mod firecrawl;

pub use mock::MockIngestor;

#[cfg(feature = "firecrawl")]
pub use firecrawl::FirecrawlIngestor;

// Re-export from traits for convenience
pub use crate::traits::ingestor::{Ingestor, RawPage, ValidatedIngestor};
