//! Storage for the pipeline.
//!
//! Everything is persisted as flat files:
//! - scraped pages as markdown
//! - batch results and the aggregated directory as JSON
//! - exports as CSV

pub mod files;

pub use files::{
    aggregated_path_for, export_csv, load_documents, read_batch, read_directory,
    read_urls_from_csv, read_urls_from_text, save_markdown, write_batch, write_directory,
    write_directory_csv, CsvLabels,
};
