//! Per-document analysis outcomes and the batch file that collects them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::company::{CompanyRecord, ExtractionPayload};
use crate::error::{ExtractionError, ParseFailure};

/// Why a document produced no structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// Human-readable reason
    pub error: String,

    /// Response text that could not be parsed, when there was one
    #[serde(
        default,
        deserialize_with = "raw_response_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_response: Option<String>,
}

// Older batch files sometimes stored the unexpected response object itself.
fn raw_response_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl AnalysisFailure {
    /// Create a failure with just a reason.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw_response: None,
        }
    }

    /// Attach the raw response text.
    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_response = Some(raw.into());
        self
    }
}

impl From<ParseFailure> for AnalysisFailure {
    fn from(failure: ParseFailure) -> Self {
        let error = failure.to_string();
        Self::new(error).with_raw_response(failure.into_raw_response())
    }
}

impl From<ExtractionError> for AnalysisFailure {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Parse(failure) => failure.into(),
            other => Self::new(other.to_string()),
        }
    }
}

/// Result of analyzing one document.
///
/// Serialized untagged so batch files read naturally: a success is the
/// payload object itself, a failure is `{"error": ..., "raw_response": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    // Listed first: any object carrying `error` is a failure.
    Failure(AnalysisFailure),
    Success(ExtractionPayload),
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Companies from a success, empty for a failure.
    pub fn companies(&self) -> &[CompanyRecord] {
        match self {
            Self::Success(payload) => &payload.companies,
            Self::Failure(_) => &[],
        }
    }
}

/// The outcome of analyzing one source document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAnalysis {
    /// Originating document (file name)
    #[serde(rename = "file")]
    pub source_id: String,

    #[serde(rename = "result")]
    pub outcome: AnalysisOutcome,
}

impl SourceAnalysis {
    /// A successful analysis.
    pub fn success(source_id: impl Into<String>, payload: ExtractionPayload) -> Self {
        Self {
            source_id: source_id.into(),
            outcome: AnalysisOutcome::Success(payload),
        }
    }

    /// A successful analysis from bare company records.
    pub fn with_companies(source_id: impl Into<String>, companies: Vec<CompanyRecord>) -> Self {
        Self::success(source_id, ExtractionPayload::new(companies))
    }

    /// A failed analysis.
    pub fn failure(source_id: impl Into<String>, failure: impl Into<AnalysisFailure>) -> Self {
        Self {
            source_id: source_id.into(),
            outcome: AnalysisOutcome::Failure(failure.into()),
        }
    }
}

/// Everything one analysis run produced, in processing order.
///
/// This is the per-batch result file: `{files_analyzed, analyses}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResults {
    /// Number of documents the batch was started with
    pub files_analyzed: usize,

    /// Outcomes recorded so far
    #[serde(default)]
    pub analyses: Vec<SourceAnalysis>,
}

impl BatchResults {
    /// Start an empty batch for `files_analyzed` documents.
    pub fn new(files_analyzed: usize) -> Self {
        Self {
            files_analyzed,
            analyses: Vec::with_capacity(files_analyzed),
        }
    }

    /// Number of successful analyses.
    pub fn success_count(&self) -> usize {
        self.analyses
            .iter()
            .filter(|a| a.outcome.is_success())
            .count()
    }

    /// Number of failed analyses.
    pub fn failure_count(&self) -> usize {
        self.analyses.len() - self.success_count()
    }
}
