//! Core trait abstractions for the job extraction library.
//!
//! These traits define the external collaborators the pipeline talks to:
//! the LLM extraction step and the page scraper.

pub mod extractor;
pub mod ingestor;
