//! Filtered views over an aggregated directory.
//!
//! A filtered view keeps only the titles a predicate accepts, and recounts
//! each company from its matching titles instead of the reported count.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::error::{ExtractionError, Result};
use crate::types::directory::{AggregatedDirectory, CompanyEntry};

/// Keywords that identify sales/business development roles.
pub const SDR_KEYWORDS: &[&str] = &[
    "sales development representative",
    "sdr",
    "bdr",
    "business development representative",
    "sales development rep",
    "business development rep",
];

lazy_static! {
    // Same alternation as SDR_KEYWORDS
    static ref SDR_REGEX: Regex = Regex::new(
        r"(?i)sales development representative|sdr|bdr|business development representative|sales development rep|business development rep"
    ).unwrap();
}

/// Decides whether a job title belongs in a view.
pub trait TitlePredicate {
    fn matches(&self, title: &str) -> bool;
}

impl<F> TitlePredicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, title: &str) -> bool {
        self(title)
    }
}

/// Case-insensitive substring match against a keyword set.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        if keywords.is_empty() {
            return Err(ExtractionError::Config(
                "keyword matcher needs at least one keyword".to_string(),
            ));
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .map_err(|e| ExtractionError::Config(format!("invalid keyword pattern: {}", e)))?;

        Ok(Self { pattern })
    }

    /// Matcher for SDR/BDR titles.
    pub fn sdr() -> Self {
        Self {
            pattern: SDR_REGEX.clone(),
        }
    }
}

impl TitlePredicate for KeywordMatcher {
    fn matches(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }
}

/// Derive a filtered view of `directory`.
///
/// Companies with no matching title are dropped. Totals are recomputed from
/// the kept entries and the result is re-sorted by the new counts.
pub fn filter_directory<P>(directory: &AggregatedDirectory, predicate: &P) -> AggregatedDirectory
where
    P: TitlePredicate + ?Sized,
{
    let mut companies: Vec<CompanyEntry> = directory
        .companies
        .iter()
        .filter_map(|company| {
            let titles: Vec<&String> = company
                .job_titles
                .iter()
                .filter(|t| predicate.matches(t))
                .collect();

            if titles.is_empty() {
                return None;
            }

            Some(CompanyEntry::new(
                company.name.clone(),
                titles.len() as u64,
                titles.into_iter().cloned(),
            ))
        })
        .collect();

    companies.sort_by(|a, b| b.job_count.cmp(&a.job_count));
    let total_jobs = companies.iter().map(|c| c.job_count).sum();

    tracing::debug!(
        kept = companies.len(),
        dropped = directory.len() - companies.len(),
        total_jobs,
        "Filtered company directory"
    );

    AggregatedDirectory::from_sorted(companies, total_jobs)
}
