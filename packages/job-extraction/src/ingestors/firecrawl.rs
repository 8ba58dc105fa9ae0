//! Firecrawl-based ingestor implementation.
//!
//! Uses the Firecrawl scrape API, which renders JavaScript-heavy job boards
//! and returns the page as markdown.
//!
//! Requires the `firecrawl` feature to be enabled.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{CrawlError, CrawlResult};
use crate::security::SecretString;
use crate::traits::ingestor::{Ingestor, RawPage};

const FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev/v1";

/// Firecrawl-based ingestor for job boards.
///
/// # Example
///
/// ```rust,ignore
/// use job_extraction::ingestors::{FirecrawlIngestor, ValidatedIngestor};
///
/// let ingestor = ValidatedIngestor::new(FirecrawlIngestor::from_env()?);
/// let page = ingestor.fetch("https://builtin.com/jobs?search=sdr").await?;
/// ```
pub struct FirecrawlIngestor {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

#[derive(Serialize)]
struct ScrapeRequest {
    url: String,
    formats: Vec<String>,
}

#[derive(Deserialize)]
struct ScrapeResponse {
    success: bool,
    data: Option<ScrapeData>,
}

#[derive(Deserialize)]
struct ScrapeData {
    markdown: Option<String>,
    metadata: Option<PageMetadata>,
}

#[derive(Deserialize)]
struct PageMetadata {
    title: Option<String>,
}

impl FirecrawlIngestor {
    /// Create a new Firecrawl ingestor with the given API key.
    pub fn new(api_key: impl Into<SecretString>) -> CrawlResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: FIRECRAWL_API_URL.to_string(),
        })
    }

    /// Create from environment variable `FIRECRAWL_API_KEY`.
    pub fn from_env() -> CrawlResult<Self> {
        let api_key = std::env::var("FIRECRAWL_API_KEY").map_err(|_| {
            CrawlError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "FIRECRAWL_API_KEY environment variable not set",
            )))
        })?;
        Self::new(api_key)
    }

    /// Set a custom base URL (self-hosted Firecrawl, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn api_error(message: impl Into<String>) -> CrawlError {
        CrawlError::Http(Box::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            message.into(),
        )))
    }

    async fn post<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> CrawlResult<R> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CrawlError::Timeout { url: url.clone() }
                } else {
                    CrawlError::Http(Box::new(e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Self::api_error(format!(
                "Firecrawl API error: {} - {}",
                status, text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CrawlError::Http(Box::new(e)))
    }

    /// Convert a scrape response into a page.
    fn response_to_raw_page(url: &str, response: ScrapeResponse) -> CrawlResult<RawPage> {
        if !response.success {
            return Err(Self::api_error("Firecrawl scrape failed"));
        }

        let data = response.data.ok_or_else(|| CrawlError::NoContent {
            url: url.to_string(),
        })?;

        let markdown = data
            .markdown
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| CrawlError::NoContent {
                url: url.to_string(),
            })?;

        let mut page = RawPage::new(url, markdown)
            .with_fetched_at(Utc::now())
            .with_metadata("source", "firecrawl");

        if let Some(title) = data.metadata.and_then(|m| m.title) {
            page = page.with_title(title);
        }

        Ok(page)
    }
}

#[async_trait]
impl Ingestor for FirecrawlIngestor {
    async fn fetch(&self, url: &str) -> CrawlResult<RawPage> {
        tracing::debug!(url = %url, "Firecrawl scrape");

        let request = ScrapeRequest {
            url: url.to_string(),
            formats: vec!["markdown".to_string()],
        };

        let response: ScrapeResponse = self.post("/scrape", &request).await?;
        Self::response_to_raw_page(url, response)
    }

    fn name(&self) -> &str {
        "firecrawl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(markdown: Option<&str>, title: Option<&str>) -> ScrapeResponse {
        ScrapeResponse {
            success: true,
            data: Some(ScrapeData {
                markdown: markdown.map(str::to_string),
                metadata: Some(PageMetadata {
                    title: title.map(str::to_string),
                }),
            }),
        }
    }

    #[test]
    fn test_create_ingestor() {
        // Construction does not validate the key
        let ingestor = FirecrawlIngestor::new("test-key").unwrap();
        assert_eq!(ingestor.name(), "firecrawl");
    }

    #[test]
    fn test_response_to_raw_page() {
        let page = FirecrawlIngestor::response_to_raw_page(
            "https://builtin.com/jobs",
            response(Some("# Jobs\n\nAcme - SDR"), Some("Jobs")),
        )
        .unwrap();

        assert_eq!(page.url, "https://builtin.com/jobs");
        assert_eq!(page.title.as_deref(), Some("Jobs"));
        assert!(page.content.contains("Acme - SDR"));
        assert_eq!(page.metadata.get("source").map(String::as_str), Some("firecrawl"));
    }

    #[test]
    fn test_response_without_markdown() {
        let result =
            FirecrawlIngestor::response_to_raw_page("https://x.com", response(None, None));
        assert!(matches!(result, Err(CrawlError::NoContent { .. })));

        let result =
            FirecrawlIngestor::response_to_raw_page("https://x.com", response(Some("   "), None));
        assert!(matches!(result, Err(CrawlError::NoContent { .. })));
    }

    #[test]
    fn test_unsuccessful_response() {
        let result = FirecrawlIngestor::response_to_raw_page(
            "https://x.com",
            ScrapeResponse {
                success: false,
                data: None,
            },
        );
        assert!(matches!(result, Err(CrawlError::Http(_))));
    }
}
