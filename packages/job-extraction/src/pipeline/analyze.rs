//! Per-source analysis: one extractor call per document.
//!
//! Every document yields exactly one [`SourceAnalysis`]. Extractor errors
//! and unparseable responses become failure outcomes here and never
//! propagate further.

use crate::error::Result;
use crate::pipeline::pacing::Pacer;
use crate::pipeline::parse::parse_payload;
use crate::pipeline::prompts::truncate_content;
use crate::traits::extractor::Extractor;
use crate::types::{
    analysis::{AnalysisFailure, BatchResults, SourceAnalysis},
    config::AnalyzeConfig,
    page::Document,
};

/// Reason recorded for documents with no content.
pub const EMPTY_DOCUMENT: &str = "empty document";

/// Analyze a single document.
///
/// Oversized content is truncated to `config.max_content_length` before it
/// reaches the extractor. Empty documents are recorded as failures without
/// calling the extractor.
pub async fn analyze_document<E: Extractor + ?Sized>(
    extractor: &E,
    document: &Document,
    config: &AnalyzeConfig,
) -> SourceAnalysis {
    let source_id = document.source_id.as_str();

    if !document.has_content() {
        tracing::warn!(source_id = %source_id, "Skipping extraction for empty document");
        return SourceAnalysis::failure(source_id, AnalysisFailure::new(EMPTY_DOCUMENT));
    }

    let content = truncate_content(&document.content, config.max_content_length);
    if content.len() != document.content_length() {
        tracing::debug!(
            source_id = %source_id,
            original_len = document.content_length(),
            max_len = config.max_content_length,
            "Truncated oversized document"
        );
    }

    let raw = match extractor.extract(&content).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(source_id = %source_id, error = %e, "Extraction call failed");
            return SourceAnalysis::failure(source_id, e);
        }
    };

    match parse_payload(&raw) {
        Ok(payload) => {
            tracing::info!(
                source_id = %source_id,
                companies = payload.companies.len(),
                jobs = payload.job_count(),
                "Document analyzed"
            );
            SourceAnalysis::success(source_id, payload)
        }
        Err(failure) => {
            tracing::warn!(source_id = %source_id, error = %failure, "Could not parse extraction response");
            SourceAnalysis::failure(source_id, failure)
        }
    }
}

/// Analyze documents one at a time, in order.
///
/// `config.limit` is applied first. `checkpoint` runs after every document
/// with everything recorded so far, so callers can persist the batch
/// incrementally; an error from it stops the batch and is returned.
pub async fn analyze_batch<E, F>(
    extractor: &E,
    documents: Vec<Document>,
    config: &AnalyzeConfig,
    mut checkpoint: F,
) -> Result<BatchResults>
where
    E: Extractor + ?Sized,
    F: FnMut(&BatchResults) -> Result<()>,
{
    let documents = config.apply_limit(documents);
    let total = documents.len();
    let pacer = Pacer::new(config.request_delay());
    let mut results = BatchResults::new(total);

    tracing::info!(
        documents = total,
        delay_ms = config.request_delay_ms,
        "Starting analysis batch"
    );

    for (index, document) in documents.iter().enumerate() {
        tracing::info!(
            index = index + 1,
            total,
            source_id = %document.source_id,
            "Analyzing document"
        );

        if document.has_content() {
            pacer.wait().await;
        }

        let analysis = analyze_document(extractor, document, config).await;
        results.analyses.push(analysis);
        checkpoint(&results)?;
    }

    tracing::info!(
        succeeded = results.success_count(),
        failed = results.failure_count(),
        "Analysis batch complete"
    );

    Ok(results)
}
