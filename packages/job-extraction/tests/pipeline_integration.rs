//! Integration tests for the scrape → analyze → aggregate → report flow.
//!
//! These tests run the whole pipeline against mock collaborators and real
//! files in a temp directory.

use job_extraction::{
    aggregate, analyze_batch, filter_directory, scrape_urls,
    stores::files::{
        aggregated_path_for, export_csv, load_documents, read_batch, read_directory, write_batch,
        write_directory, CsvLabels,
    },
    testing::MockExtractor,
    AnalysisOutcome, AnalyzeConfig, KeywordMatcher, MockIngestor, RawPage, ScrapeConfig,
};
use tempfile::TempDir;

const PAGE_A: &str = "# Remote SDR jobs\n\nAcme - SDR\nAcme - BDR";
const PAGE_B: &str = "# More jobs\n\nAcme - SDR";
const PAGE_C: &str = "# Engineering\n\nGlobex - Rust Engineer";

fn extractor() -> MockExtractor {
    MockExtractor::new()
        .with_response(
            "Remote SDR jobs",
            r#"```json
{"companies": [{"name": "Acme", "job_count": 2, "job_titles": ["SDR", "BDR"]}], "total_companies": 1, "total_jobs": 2}
```"#,
        )
        .with_response(
            "More jobs",
            r#"Here you go: {"companies": [{"name": "Acme", "job_count": 1, "job_titles": ["SDR"]}]}"#,
        )
        .with_error("Engineering", "429 Too Many Requests")
}

fn fast_config() -> AnalyzeConfig {
    AnalyzeConfig::new().with_request_delay_ms(0)
}

#[tokio::test]
async fn test_end_to_end_acme_example() {
    let dir = TempDir::new().unwrap();
    let pages = dir.path().join("scraped_content");

    // Scrape three pages to disk
    let ingestor = MockIngestor::new()
        .with_page(RawPage::new("https://jobs.example/a", PAGE_A))
        .with_page(RawPage::new("https://jobs.example/b", PAGE_B))
        .with_page(RawPage::new("https://jobs.example/c", PAGE_C));
    let urls: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|p| format!("https://jobs.example/{}", p))
        .collect();
    let report = scrape_urls(
        &ingestor,
        &urls,
        &ScrapeConfig::new()
            .with_output_dir(&pages)
            .with_request_delay_ms(0),
    )
    .await;
    assert!(report.all_succeeded());

    // Analyze, persisting after every document
    let batch_path = dir.path().join("company_analysis.json");
    let documents = load_documents(&pages).unwrap();
    assert_eq!(documents.len(), 3);

    let mock = extractor();
    let batch = analyze_batch(&mock, documents, &fast_config(), |partial| {
        write_batch(&batch_path, partial)
    })
    .await
    .unwrap();

    assert_eq!(mock.call_count(), 3);
    assert_eq!(batch.files_analyzed, 3);
    assert_eq!(batch.success_count(), 2);
    assert_eq!(read_batch(&batch_path).unwrap(), batch);

    let failure = batch
        .analyses
        .iter()
        .find(|a| !a.outcome.is_success())
        .unwrap();
    match &failure.outcome {
        AnalysisOutcome::Failure(f) => assert!(f.error.contains("429")),
        other => panic!("expected failure, got {:?}", other),
    }

    // Aggregate
    let directory = aggregate(&batch.analyses);
    assert_eq!(directory.total_companies, 1);
    assert_eq!(directory.total_jobs, 3);
    let acme = directory.get("Acme").unwrap();
    assert_eq!(acme.job_count, 3);
    assert_eq!(acme.job_titles.len(), 2);

    let aggregated_path = aggregated_path_for(&batch_path);
    write_directory(&aggregated_path, &directory).unwrap();
    assert_eq!(read_directory(&aggregated_path).unwrap(), directory);

    // Filter on "contains sdr"
    let view = filter_directory(&directory, &|title: &str| {
        title.to_lowercase().contains("sdr")
    });
    let acme = view.get("Acme").unwrap();
    assert_eq!(acme.job_count, 1);
    assert_eq!(acme.job_titles.iter().collect::<Vec<_>>(), vec!["SDR"]);
    assert_eq!(view.total_jobs, 1);

    // SDR report export
    let csv_path = dir.path().join("sdr_companies.csv");
    let sdr_view = filter_directory(&directory, &KeywordMatcher::sdr());
    export_csv(&csv_path, &sdr_view, &CsvLabels::sdr()).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "Company Name,SDR Job Count,SDR Job Titles\nAcme,2,\"SDR, BDR\"\n"
    );
}

#[tokio::test]
async fn test_partial_batch_is_aggregable() {
    let dir = TempDir::new().unwrap();
    let batch_path = dir.path().join("company_analysis.json");

    let documents = vec![
        job_extraction::Document::new("a.md", PAGE_A),
        job_extraction::Document::new("b.md", PAGE_B),
    ];

    // Stop after the first document, as an interrupted run would
    let mut seen = 0;
    let result = analyze_batch(&extractor(), documents, &fast_config(), |partial| {
        write_batch(&batch_path, partial)?;
        seen += 1;
        if seen == 1 {
            return Err(job_extraction::ExtractionError::Config("interrupted".into()));
        }
        Ok(())
    })
    .await;
    assert!(result.is_err());

    let partial = read_batch(&batch_path).unwrap();
    assert_eq!(partial.files_analyzed, 2);
    assert_eq!(partial.analyses.len(), 1);

    let directory = aggregate(&partial.analyses);
    assert_eq!(directory.get("Acme").unwrap().job_count, 2);
}

#[test]
fn test_reads_batch_file_written_by_earlier_tooling() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("company_analysis.json");
    std::fs::write(
        &path,
        r#"{
  "files_analyzed": 5,
  "analyses": [
    {"file": "a.md", "result": {"companies": [{"name": "Acme", "job_count": 2, "job_titles": ["SDR"]}], "total_companies": 1, "total_jobs": 2}},
    {"file": "b.md", "result": {"error": "No JSON found in the response", "raw_response": "sorry"}},
    {"file": "c.md", "result": {"companies": [{"name": "Globex"}]}},
    {"file": "d.md", "result": {"companies": [{"name": "Acme", "job_count": null, "job_titles": ["BDR"]}, {"name": "Initech", "job_count": 1, "job_titles": null}]}},
    {"file": "e.md", "result": {"error": "Unexpected response format", "raw_response": {"choices": []}}}
  ]
}"#,
    )
    .unwrap();

    let batch = read_batch(&path).unwrap();
    assert_eq!(batch.success_count(), 3);
    assert_eq!(batch.failure_count(), 2);

    let directory = aggregate(&batch.analyses);
    assert_eq!(directory.total_jobs, 3);
    assert_eq!(directory.get("Globex").unwrap().job_count, 0);
    assert_eq!(directory.get("Initech").unwrap().job_count, 1);

    let acme = directory.get("Acme").unwrap();
    assert_eq!(acme.job_count, 2);
    assert_eq!(acme.job_titles.len(), 2);
}
