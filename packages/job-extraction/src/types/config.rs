//! Configuration types for analysis and scraping runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default cap on document length sent to the extractor (bytes).
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 100_000;

/// Configuration for an analysis batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Documents longer than this are truncated before extraction.
    ///
    /// Default: 100,000.
    pub max_content_length: usize,

    /// Pause between successive extraction calls, in milliseconds.
    ///
    /// Default: 2000.
    pub request_delay_ms: u64,

    /// Analyze at most this many documents (0 = all).
    #[serde(default)]
    pub limit: usize,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            request_delay_ms: 2000,
            limit: 0,
        }
    }
}

impl AnalyzeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the truncation threshold.
    pub fn with_max_content_length(mut self, max: usize) -> Self {
        self.max_content_length = max;
        self
    }

    /// Set the delay between extraction calls.
    pub fn with_request_delay_ms(mut self, delay_ms: u64) -> Self {
        self.request_delay_ms = delay_ms;
        self
    }

    /// Limit the number of analyzed documents (0 = all).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Apply `limit` to a document list.
    pub fn apply_limit<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.limit > 0 && self.limit < items.len() {
            items.truncate(self.limit);
        }
        items
    }
}

/// Configuration for a scraping run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Directory the markdown files are written to.
    ///
    /// Default: `scraped_content`.
    pub output_dir: PathBuf,

    /// Pause between successive fetches, in milliseconds.
    ///
    /// Default: 1000.
    pub request_delay_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("scraped_content"),
            request_delay_ms: 1000,
        }
    }
}

impl ScrapeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the delay between fetches.
    pub fn with_request_delay_ms(mut self, delay_ms: u64) -> Self {
        self.request_delay_ms = delay_ms;
        self
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let config = AnalyzeConfig::default();
        assert_eq!(config.max_content_length, 100_000);
        assert_eq!(config.request_delay(), Duration::from_secs(2));
        assert_eq!(config.limit, 0);
    }

    #[test]
    fn test_apply_limit() {
        let items = vec![1, 2, 3, 4];
        assert_eq!(AnalyzeConfig::new().apply_limit(items.clone()).len(), 4);
        assert_eq!(
            AnalyzeConfig::new().with_limit(2).apply_limit(items.clone()),
            vec![1, 2]
        );
        assert_eq!(AnalyzeConfig::new().with_limit(10).apply_limit(items).len(), 4);
    }

    #[test]
    fn test_scrape_builder() {
        let config = ScrapeConfig::new()
            .with_output_dir("out/sdr")
            .with_request_delay_ms(2000);
        assert_eq!(config.output_dir, PathBuf::from("out/sdr"));
        assert_eq!(config.request_delay(), Duration::from_secs(2));
    }
}
