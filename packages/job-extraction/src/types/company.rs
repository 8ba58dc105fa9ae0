//! Company records as reported by the extraction step.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One company found in one document.
///
/// `job_count` is whatever the extractor reported. It is not derived from
/// `job_titles` and the two routinely disagree: the model counts listings,
/// while titles are often listed once per distinct role.
///
/// Deserializing goes through [`CompanyRecord::from_value`], so stored
/// records get the same leniency as fresh extractor output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    /// Identity key, compared case-sensitively
    pub name: String,

    /// Number of listings reported for this company
    pub job_count: u64,

    /// Job titles as reported (may contain duplicates)
    pub job_titles: Vec<String>,
}

impl CompanyRecord {
    /// Create a new record with no listings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_count: 0,
            job_titles: Vec::new(),
        }
    }

    /// Set the reported job count.
    pub fn with_job_count(mut self, job_count: u64) -> Self {
        self.job_count = job_count;
        self
    }

    /// Add a job title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.job_titles.push(title.into());
        self
    }

    /// Add multiple job titles.
    pub fn with_titles(mut self, titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.job_titles.extend(titles.into_iter().map(|t| t.into()));
        self
    }

    /// Build a record from one loosely-typed company object.
    ///
    /// Returns `None` when there is no string `name`. A missing or
    /// non-integer `job_count` becomes 0, and non-string titles are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name")?.as_str()?.to_string();

        let job_count = value
            .get("job_count")
            .and_then(|count| {
                count
                    .as_u64()
                    .or_else(|| count.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            })
            .unwrap_or(0);

        let job_titles = value
            .get("job_titles")
            .and_then(Value::as_array)
            .map(|titles| {
                titles
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name,
            job_count,
            job_titles,
        })
    }
}

impl<'de> Deserialize<'de> for CompanyRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).ok_or_else(|| de::Error::custom("company entry has no name"))
    }
}

/// The structured body of a successful extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionPayload {
    /// Companies found in the document
    pub companies: Vec<CompanyRecord>,

    /// Company count as reported by the extractor (diagnostic only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_companies: Option<u64>,

    /// Job count as reported by the extractor (diagnostic only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_jobs: Option<u64>,
}

impl<'de> Deserialize<'de> for ExtractionPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(de::Error::custom("extraction payload is not an object"));
        }
        Ok(Self::from_value(&value))
    }
}

impl ExtractionPayload {
    /// Create a payload from a list of companies.
    pub fn new(companies: Vec<CompanyRecord>) -> Self {
        Self {
            companies,
            total_companies: None,
            total_jobs: None,
        }
    }

    /// Normalize a parsed JSON value into a payload.
    ///
    /// Never fails: a missing `companies` array yields an empty payload and
    /// unusable company entries are dropped.
    pub fn from_value(value: &Value) -> Self {
        let entries = value
            .get("companies")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut companies = Vec::with_capacity(entries.len());
        for entry in entries {
            match CompanyRecord::from_value(entry) {
                Some(record) => companies.push(record),
                None => tracing::warn!(entry = %entry, "Dropping company entry without a name"),
            }
        }

        Self {
            companies,
            total_companies: value.get("total_companies").and_then(Value::as_u64),
            total_jobs: value.get("total_jobs").and_then(Value::as_u64),
        }
    }

    /// Sum of the per-company job counts in this payload.
    pub fn job_count(&self) -> u64 {
        self.companies.iter().map(|c| c.job_count).sum()
    }
}
