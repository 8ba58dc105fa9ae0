//! Scrape job-listing URLs to markdown files.
//!
//! URLs are fetched one at a time through an [`Ingestor`], paced by
//! `ScrapeConfig::request_delay_ms`. Each page lands in the output directory
//! as `<clean_filename>_<YYYYmmdd_HHMMSS>.md`. A failed URL is recorded in
//! the report and the run moves on.

use chrono::Local;
use std::path::PathBuf;

use crate::pipeline::pacing::Pacer;
use crate::stores::files::save_markdown;
use crate::traits::ingestor::Ingestor;
use crate::types::config::ScrapeConfig;

const MAX_FILENAME_LEN: usize = 200;

const UNSAFE_FILENAME_CHARS: &[char] = &[
    '/', '?', '&', '=', ':', '#', '%', '+', ' ', '<', '>', '|', '"', '*',
];

/// Turn a URL into a filesystem-safe file stem.
///
/// The scheme is dropped, unsafe characters become `_`, and the result is
/// capped at 200 characters.
pub fn clean_filename(url: &str) -> String {
    let without_scheme = url.split("//").last().unwrap_or(url);

    without_scheme
        .chars()
        .map(|c| if UNSAFE_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_FILENAME_LEN)
        .collect()
}

/// What happened to one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeStatus {
    /// Content was saved to this file
    Saved(PathBuf),
    /// Fetching or saving failed
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOutcome {
    pub url: String,
    pub status: ScrapeStatus,
}

impl ScrapeOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self.status, ScrapeStatus::Saved(_))
    }
}

/// Per-URL outcomes of a scrape run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    pub outcomes: Vec<ScrapeOutcome>,
}

impl ScrapeReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &ScrapeOutcome> {
        self.outcomes.iter().filter(|o| o.is_saved())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ScrapeOutcome> {
        self.outcomes.iter().filter(|o| !o.is_saved())
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }
}

async fn scrape_one<I: Ingestor + ?Sized>(
    ingestor: &I,
    url: &str,
    config: &ScrapeConfig,
) -> ScrapeStatus {
    let page = match ingestor.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(url = %url, ingestor = ingestor.name(), error = %e, "Scrape failed");
            return ScrapeStatus::Failed(e.to_string());
        }
    };

    if !page.has_content() {
        tracing::warn!(url = %url, "Scrape returned no markdown content");
        return ScrapeStatus::Failed("no markdown content".to_string());
    }

    let stem = format!(
        "{}_{}",
        clean_filename(url),
        Local::now().format("%Y%m%d_%H%M%S")
    );

    match save_markdown(&config.output_dir, &stem, &page.content) {
        Ok(path) => {
            tracing::info!(url = %url, path = %path.display(), bytes = page.content.len(), "Saved page");
            ScrapeStatus::Saved(path)
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Could not save scraped page");
            ScrapeStatus::Failed(e.to_string())
        }
    }
}

/// Scrape `urls` in order and save each page under `config.output_dir`.
pub async fn scrape_urls<I: Ingestor + ?Sized>(
    ingestor: &I,
    urls: &[String],
    config: &ScrapeConfig,
) -> ScrapeReport {
    let pacer = Pacer::new(config.request_delay());
    let mut report = ScrapeReport::default();

    for (index, url) in urls.iter().enumerate() {
        pacer.wait().await;
        tracing::info!(index = index + 1, total = urls.len(), url = %url, "Scraping URL");

        let status = scrape_one(ingestor, url, config).await;
        report.outcomes.push(ScrapeOutcome {
            url: url.clone(),
            status,
        });
    }

    tracing::info!(
        succeeded = report.success_count(),
        failed = report.failure_count(),
        "Scrape run complete"
    );

    report
}
