//! Typed errors for the job extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during extraction and report operations.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The extraction service could not be reached or rejected the call
    /// (network, auth, timeout, quota).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response text could not be interpreted as structured data
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    /// Reading or writing a flat file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid glob pattern for document discovery
    #[error("invalid document pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl ExtractionError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Build a transport error from a plain message.
    pub fn transport(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::Transport(message.into())
    }
}

/// Failure to locate or parse a JSON object in an extraction response.
///
/// Both variants keep the untouched response text for diagnostics.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// No `{ ... }` span was found in the response
    #[error("No JSON found in the response")]
    NoJsonFound { raw_response: String },

    /// The `{ ... }` span did not parse
    #[error("JSON parsing error: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        raw_response: String,
    },
}

impl ParseFailure {
    /// The raw response text that failed to parse.
    pub fn raw_response(&self) -> &str {
        match self {
            Self::NoJsonFound { raw_response } | Self::InvalidJson { raw_response, .. } => {
                raw_response
            }
        }
    }

    /// Consume the failure, returning the raw response text.
    pub fn into_raw_response(self) -> String {
        match self {
            Self::NoJsonFound { raw_response } | Self::InvalidJson { raw_response, .. } => {
                raw_response
            }
        }
    }
}

/// Errors that can occur while fetching pages.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Scraping service returned no usable content
    #[error("no content returned for: {url}")]
    NoContent { url: String },

    /// Connection timeout
    #[error("timeout crawling: {url}")]
    Timeout { url: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for crawl operations.
pub type CrawlResult<T> = std::result::Result<T, CrawlError>;
