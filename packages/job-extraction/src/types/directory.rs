//! The aggregated company directory.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One company in the aggregated directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub name: String,

    /// Accumulated job count (sum of reported counts, or the matching-title
    /// count in a filtered view)
    pub job_count: u64,

    /// Distinct titles in first-seen order
    #[serde(default)]
    pub job_titles: IndexSet<String>,
}

impl CompanyEntry {
    /// Create an entry.
    pub fn new(
        name: impl Into<String>,
        job_count: u64,
        job_titles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            job_count,
            job_titles: job_titles.into_iter().map(|t| t.into()).collect(),
        }
    }

    /// Titles joined for display and CSV export.
    pub fn joined_titles(&self) -> String {
        self.job_titles
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Canonical, deduplicated company directory.
///
/// Companies are ordered by `job_count` descending, ties in first-encountered
/// order. This is also the aggregated file format:
/// `{companies, total_companies, total_jobs}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedDirectory {
    pub companies: Vec<CompanyEntry>,
    pub total_companies: usize,
    pub total_jobs: u64,
}

impl AggregatedDirectory {
    /// Build a directory from entries that are already in final order.
    pub fn from_sorted(companies: Vec<CompanyEntry>, total_jobs: u64) -> Self {
        Self {
            total_companies: companies.len(),
            companies,
            total_jobs,
        }
    }

    /// Look up a company by exact name.
    pub fn get(&self, name: &str) -> Option<&CompanyEntry> {
        self.companies.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Top `n` companies by job count.
    pub fn top(&self, n: usize) -> &[CompanyEntry] {
        &self.companies[..n.min(self.companies.len())]
    }

    /// Canonical pretty JSON used for the aggregated file.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
