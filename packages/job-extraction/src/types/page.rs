//! Document type - the unit of extraction.

use serde::{Deserialize, Serialize};

/// One scraped page's text, identified by its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier (the markdown file name)
    pub source_id: String,

    /// Page content, usually markdown
    pub content: String,
}

impl Document {
    /// Create a new document.
    pub fn new(source_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            content: content.into(),
        }
    }

    /// Check if this document has any non-whitespace content.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Content length in bytes.
    pub fn content_length(&self) -> usize {
        self.content.len()
    }
}
