//! Mock ingestor for testing.
//!
//! Provides a configurable mock implementation of the Ingestor trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CrawlError, CrawlResult};
use crate::traits::ingestor::{Ingestor, RawPage};

/// Mock ingestor for testing.
///
/// Returns canned pages by URL; unknown URLs fail with `NoContent`.
///
/// # Example
///
/// ```rust
/// use job_extraction::ingestors::{MockIngestor, RawPage};
///
/// let mock = MockIngestor::new();
/// mock.add_page(RawPage::new("https://example.com", "# Hello\n\nWorld"));
/// ```
#[derive(Default)]
pub struct MockIngestor {
    /// Canned pages indexed by URL
    pages: Arc<RwLock<HashMap<String, RawPage>>>,
    /// URLs that fail with an HTTP error
    failing: Arc<RwLock<HashMap<String, String>>>,
    /// URLs requested, in call order
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockIngestor {
    /// Create a new empty mock ingestor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page that will be returned by fetch.
    pub fn add_page(&self, page: RawPage) {
        let mut pages = self.pages.write().unwrap();
        pages.insert(page.url.clone(), page);
    }

    /// Create a mock with a pre-configured page (builder pattern).
    pub fn with_page(self, page: RawPage) -> Self {
        self.add_page(page);
        self
    }

    /// Make fetching `url` fail with an HTTP error carrying `message`.
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.failing
            .write()
            .unwrap()
            .insert(url.into(), message.into());
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were requested via fetch.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.fetch_calls.write().unwrap().clear();
    }
}

impl Clone for MockIngestor {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            failing: Arc::clone(&self.failing),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl Ingestor for MockIngestor {
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        if let Some(message) = self.failing.read().unwrap().get(url) {
            return Err(CrawlError::Http(message.clone().into()));
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| CrawlError::NoContent {
                url: url.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
