//! Ingestor trait for fetching job-listing pages.
//!
//! # Usage
//!
//! ```rust,ignore
//! use job_extraction::traits::ingestor::{Ingestor, ValidatedIngestor};
//!
//! let ingestor = ValidatedIngestor::new(FirecrawlIngestor::new(api_key)?);
//! let page = ingestor.fetch("https://builtin.com/jobs?search=sdr").await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CrawlError, CrawlResult};

/// Raw page content as returned by a scraping service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    /// URL this content was fetched from
    pub url: String,

    /// Page content (markdown)
    pub content: String,

    /// Content title if available
    pub title: Option<String>,

    /// When the content was fetched
    pub fetched_at: DateTime<Utc>,

    /// Source-specific metadata
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl RawPage {
    /// Create a new raw page with minimal fields.
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
            title: None,
            fetched_at: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Add a metadata key-value pair.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Check if this page has content.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Scraping black box: fetch one URL as markdown.
#[async_trait]
pub trait Ingestor: Send + Sync {
    /// Fetch a single URL.
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage>;

    /// Get the ingestor name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// An ingestor that rejects malformed or non-HTTP URLs before fetching.
pub struct ValidatedIngestor<I: Ingestor> {
    inner: I,
}

impl<I: Ingestor> ValidatedIngestor<I> {
    /// Wrap an ingestor with URL validation.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Get a reference to the inner ingestor.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    fn validate(url: &str) -> CrawlResult<()> {
        let parsed = url::Url::parse(url).map_err(|_| CrawlError::InvalidUrl {
            url: url.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Ok(()),
            _ => Err(CrawlError::InvalidUrl {
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl<I: Ingestor> Ingestor for ValidatedIngestor<I> {
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage> {
        Self::validate(url)?;
        self.inner.fetch(url).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestors::MockIngestor;

    #[test]
    fn test_raw_page_builder() {
        let page = RawPage::new("https://example.com/jobs", "# Jobs")
            .with_title("Jobs")
            .with_metadata("source", "test");

        assert_eq!(page.title.as_deref(), Some("Jobs"));
        assert_eq!(page.metadata.get("source").map(String::as_str), Some("test"));
        assert!(page.has_content());
    }

    #[tokio::test]
    async fn test_validated_ingestor_rejects_bad_urls() {
        let mock = MockIngestor::new().with_page(RawPage::new("https://example.com", "ok"));
        let ingestor = ValidatedIngestor::new(mock.clone());

        assert!(matches!(
            ingestor.fetch("not a url").await,
            Err(CrawlError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ingestor.fetch("file:///etc/passwd").await,
            Err(CrawlError::InvalidUrl { .. })
        ));
        assert_eq!(mock.fetch_call_count(), 0);

        let page = ingestor.fetch("https://example.com").await.unwrap();
        assert_eq!(page.content, "ok");
        assert_eq!(mock.fetch_call_count(), 1);
    }
}
