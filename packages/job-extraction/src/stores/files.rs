//! Flat-file persistence for the pipeline.
//!
//! Scraped pages are markdown files in a directory, batch results and the
//! aggregated directory are pretty-printed JSON, and the export views are
//! CSV.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExtractionError, Result};
use crate::types::{analysis::BatchResults, directory::AggregatedDirectory, page::Document};

/// Load every `*.md` file in `dir`, sorted by file name.
///
/// The file name becomes the document's source id. Invalid UTF-8 is
/// replaced rather than rejected. A file that cannot be read at all loads
/// as an empty document, which the analyzer records as a failure.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(ExtractionError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory not found"),
        ));
    }

    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.md");
    let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read document");
                String::new()
            }
        };
        let source_id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        documents.push(Document::new(source_id, content));
    }

    tracing::debug!(dir = %dir.display(), documents = documents.len(), "Loaded documents");
    Ok(documents)
}

/// Write `content` to `<dir>/<stem>.md`, creating `dir` if needed.
pub fn save_markdown(dir: &Path, stem: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ExtractionError::io(dir, e))?;
    let path = dir.join(format!("{}.md", stem));
    fs::write(&path, content).map_err(|e| ExtractionError::io(&path, e))?;
    Ok(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|e| ExtractionError::io(path, e))?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| ExtractionError::io(path, e))
}

pub fn read_batch(path: &Path) -> Result<BatchResults> {
    read_json(path)
}

pub fn write_batch(path: &Path, results: &BatchResults) -> Result<()> {
    write_json(path, results)
}

pub fn read_directory(path: &Path) -> Result<AggregatedDirectory> {
    read_json(path)
}

pub fn write_directory(path: &Path, directory: &AggregatedDirectory) -> Result<()> {
    write_json(path, directory)
}

/// Path of the aggregated file that accompanies a batch file:
/// `company_analysis.json` becomes `company_analysis_aggregated.json`.
pub fn aggregated_path_for(batch_path: &Path) -> PathBuf {
    let stem = batch_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match batch_path.extension() {
        Some(ext) => format!("{}_aggregated.{}", stem, ext.to_string_lossy()),
        None => format!("{}_aggregated", stem),
    };
    batch_path.with_file_name(file_name)
}

/// Read URLs from a text file, one per line. Blank lines are skipped.
pub fn read_urls_from_text(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| ExtractionError::io(path, e))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Read URLs from the `url` column of a CSV file. Empty cells are skipped.
pub fn read_urls_from_csv(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == "url")
        .ok_or_else(|| {
            ExtractionError::Config(format!("{} has no 'url' column", path.display()))
        })?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(column).map(str::trim) {
            if !url.is_empty() {
                urls.push(url.to_string());
            }
        }
    }
    Ok(urls)
}

/// Column headers for a CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLabels {
    pub count: &'static str,
    pub titles: &'static str,
}

impl CsvLabels {
    /// Labels for the full directory.
    pub fn all_jobs() -> Self {
        Self {
            count: "Job Count",
            titles: "Job Titles",
        }
    }

    /// Labels for the SDR view.
    pub fn sdr() -> Self {
        Self {
            count: "SDR Job Count",
            titles: "SDR Job Titles",
        }
    }
}

/// Write `directory` as CSV: company name, count, comma-joined titles.
pub fn write_directory_csv<W: Write>(
    directory: &AggregatedDirectory,
    labels: &CsvLabels,
    writer: W,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Company Name", labels.count, labels.titles])?;

    for company in &directory.companies {
        let count = company.job_count.to_string();
        let titles = company.joined_titles();
        csv.write_record([company.name.as_str(), count.as_str(), titles.as_str()])?;
    }

    csv.flush().map_err(|e| ExtractionError::io("<csv>", e))?;
    Ok(())
}

/// Write `directory` as CSV to `path`.
pub fn export_csv(path: &Path, directory: &AggregatedDirectory, labels: &CsvLabels) -> Result<()> {
    let file = fs::File::create(path).map_err(|e| ExtractionError::io(path, e))?;
    write_directory_csv(directory, labels, file)
}
