//! Testing utilities including mock implementations.
//!
//! Useful for exercising the analysis pipeline without making real LLM calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{ExtractionError, Result};
use crate::traits::extractor::Extractor;

/// Canned reply for a matching document.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// A mock extractor for testing.
///
/// Replies are matched by substring: the first registered key contained in
/// the document wins. Unmatched documents get the default reply, which is an
/// empty company list unless overridden.
#[derive(Clone)]
pub struct MockExtractor {
    replies: Arc<RwLock<Vec<(String, MockReply)>>>,
    default_reply: Arc<RwLock<MockReply>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self {
            replies: Arc::default(),
            default_reply: Arc::new(RwLock::new(MockReply::Text(
                r#"{"companies": []}"#.to_string(),
            ))),
            calls: Arc::default(),
        }
    }
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `raw` to documents containing `key`.
    pub fn with_response(self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((key.into(), MockReply::Text(raw.into())));
        self
    }

    /// Fail documents containing `key` with a transport error.
    pub fn with_error(self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push((key.into(), MockReply::Error(message.into())));
        self
    }

    /// Reply for documents no key matches.
    pub fn with_default_response(self, raw: impl Into<String>) -> Self {
        *self.default_reply.write().unwrap() = MockReply::Text(raw.into());
        self
    }

    /// Documents passed to `extract`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, document: &str) -> Result<String> {
        self.calls.write().unwrap().push(document.to_string());

        let reply = self
            .replies
            .read()
            .unwrap()
            .iter()
            .find(|(key, _)| document.contains(key.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default_reply.read().unwrap().clone());

        match reply {
            MockReply::Text(raw) => Ok(raw),
            MockReply::Error(message) => Err(ExtractionError::transport(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matching_and_default() {
        let mock = MockExtractor::new()
            .with_response("Acme", r#"{"companies": [{"name": "Acme"}]}"#)
            .with_error("Globex", "503 Service Unavailable");

        assert!(mock.extract("Acme is hiring").await.unwrap().contains("Acme"));
        assert!(matches!(
            mock.extract("Globex careers").await,
            Err(ExtractionError::Transport(_))
        ));
        assert_eq!(
            mock.extract("nothing here").await.unwrap(),
            r#"{"companies": []}"#
        );
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.calls()[1], "Globex careers");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockExtractor::new().with_default_response("no json");
        let clone = mock.clone();

        assert_eq!(clone.extract("x").await.unwrap(), "no json");
        assert_eq!(mock.call_count(), 1);

        mock.clear_calls();
        assert_eq!(clone.call_count(), 0);
    }
}
