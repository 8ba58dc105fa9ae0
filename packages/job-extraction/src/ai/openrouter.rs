//! OpenRouter implementation of the Extractor trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use job_extraction::ai::OpenRouterExtractor;
//!
//! let extractor = OpenRouterExtractor::new(&api_key)?.with_model("google/gemini-2.5-pro-preview");
//! let raw = extractor.extract(&markdown).await?;
//! ```

use async_trait::async_trait;
use openrouter_client::{ChatRequest, Message, OpenRouterClient, DEFAULT_MODEL};

use crate::error::{ExtractionError, Result};
use crate::pipeline::prompts::format_extract_prompt;
use crate::security::SecretString;
use crate::traits::extractor::Extractor;

/// Extractor backed by an OpenRouter chat model.
#[derive(Clone, Debug)]
pub struct OpenRouterExtractor {
    client: OpenRouterClient,
    model: String,
}

impl OpenRouterExtractor {
    /// Create an extractor using the default model.
    pub fn new(api_key: &SecretString) -> Result<Self> {
        let client = OpenRouterClient::new(api_key.expose())
            .map_err(|e| ExtractionError::Config(e.to_string()))?;
        Ok(Self::from_client(client))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: OpenRouterClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set the model (default: google/gemini-2.5-pro-preview).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Extractor for OpenRouterExtractor {
    async fn extract(&self, document: &str) -> Result<String> {
        let request =
            ChatRequest::new(&self.model).message(Message::user(format_extract_prompt(document)));

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| ExtractionError::Transport(Box::new(e)))?;

        tracing::debug!(
            model = %self.model,
            response_len = response.content.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Extraction response received"
        );

        Ok(response.content)
    }
}
