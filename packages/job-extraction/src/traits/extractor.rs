//! Extractor trait for the LLM extraction step.
//!
//! The extractor turns document text into raw response text. It knows how
//! to prompt its model; it does not interpret the answer. Interpretation is
//! the parser's job (see [`crate::pipeline::parse`]).

use async_trait::async_trait;

use crate::error::Result;

/// LLM extraction black box.
///
/// Implementations wrap a specific provider (OpenRouter, etc.) and return
/// whatever text the model produced. Transport problems (network, auth,
/// timeout, quota) are reported as errors; the analyzer converts them into
/// failure outcomes.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract companies and job titles from one document.
    ///
    /// Returns the model's raw response text, which is expected to contain
    /// a JSON object somewhere inside it.
    async fn extract(&self, document: &str) -> Result<String>;
}

#[async_trait]
impl<E: Extractor + ?Sized> Extractor for Box<E> {
    async fn extract(&self, document: &str) -> Result<String> {
        (**self).extract(document).await
    }
}

#[async_trait]
impl<E: Extractor + ?Sized> Extractor for std::sync::Arc<E> {
    async fn extract(&self, document: &str) -> Result<String> {
        (**self).extract(document).await
    }
}
