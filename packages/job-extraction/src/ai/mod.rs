//! LLM extractor implementations.
//!
//! Provides reference implementations of the `Extractor` trait. Users can
//! use these directly or implement their own.

#[cfg(feature = "openrouter")]
mod openrouter;

#[cfg(feature = "openrouter")]
pub use openrouter::OpenRouterExtractor;
