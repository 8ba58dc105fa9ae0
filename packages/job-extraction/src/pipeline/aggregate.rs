//! Merge per-source outcomes into one company directory.

use indexmap::IndexMap;

use crate::types::{
    analysis::{AnalysisOutcome, SourceAnalysis},
    directory::{AggregatedDirectory, CompanyEntry},
};

/// Aggregate analyses into a directory keyed by exact company name.
///
/// Counts are summed and title sets unioned per company. Failure outcomes
/// contribute nothing. Companies are sorted by job count descending; ties
/// keep the order in which they were first seen.
pub fn aggregate<'a, I>(analyses: I) -> AggregatedDirectory
where
    I: IntoIterator<Item = &'a SourceAnalysis>,
{
    let mut by_name: IndexMap<String, CompanyEntry> = IndexMap::new();
    let mut total_jobs: u64 = 0;
    let mut skipped = 0usize;

    for analysis in analyses {
        let payload = match &analysis.outcome {
            AnalysisOutcome::Success(payload) => payload,
            AnalysisOutcome::Failure(_) => {
                skipped += 1;
                continue;
            }
        };

        for record in &payload.companies {
            total_jobs += record.job_count;

            let entry = by_name
                .entry(record.name.clone())
                .or_insert_with(|| CompanyEntry::new(record.name.clone(), 0, Vec::<String>::new()));
            entry.job_count += record.job_count;
            entry.job_titles.extend(record.job_titles.iter().cloned());
        }
    }

    let mut companies: Vec<CompanyEntry> = by_name.into_values().collect();
    // sort_by is stable
    companies.sort_by(|a, b| b.job_count.cmp(&a.job_count));

    tracing::debug!(
        companies = companies.len(),
        total_jobs,
        skipped_failures = skipped,
        "Aggregated company directory"
    );

    AggregatedDirectory::from_sorted(companies, total_jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::AnalysisFailure;
    use crate::types::company::CompanyRecord;

    fn acme(count: u64, titles: &[&str]) -> CompanyRecord {
        CompanyRecord::new("Acme")
            .with_job_count(count)
            .with_titles(titles.iter().copied())
    }

    #[test]
    fn test_merges_counts_and_titles() {
        let analyses = vec![
            SourceAnalysis::with_companies("a.md", vec![acme(2, &["SDR", "BDR"])]),
            SourceAnalysis::with_companies("b.md", vec![acme(1, &["SDR"])]),
        ];

        let directory = aggregate(&analyses);

        assert_eq!(directory.total_companies, 1);
        assert_eq!(directory.total_jobs, 3);
        let entry = directory.get("Acme").unwrap();
        assert_eq!(entry.job_count, 3);
        assert_eq!(entry.job_titles.len(), 2);
        assert!(entry.job_titles.contains("SDR"));
        assert!(entry.job_titles.contains("BDR"));
    }

    #[test]
    fn test_failures_are_skipped() {
        let with_failure = vec![
            SourceAnalysis::with_companies("a.md", vec![acme(2, &["SDR"])]),
            SourceAnalysis::failure("b.md", AnalysisFailure::new("timeout")),
            SourceAnalysis::with_companies(
                "c.md",
                vec![CompanyRecord::new("Globex").with_job_count(4)],
            ),
        ];
        let without_failure = vec![with_failure[0].clone(), with_failure[2].clone()];

        assert_eq!(aggregate(&with_failure), aggregate(&without_failure));
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let analyses = vec![SourceAnalysis::with_companies(
            "a.md",
            vec![
                CompanyRecord::new("Initech").with_job_count(1),
                CompanyRecord::new("Globex").with_job_count(5),
                CompanyRecord::new("Acme").with_job_count(1),
                CompanyRecord::new("Hooli").with_job_count(5),
            ],
        )];

        let names: Vec<_> = aggregate(&analyses)
            .companies
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Globex", "Hooli", "Initech", "Acme"]);
    }

    #[test]
    fn test_zero_count_company_retained() {
        let analyses = vec![SourceAnalysis::with_companies(
            "a.md",
            vec![CompanyRecord::new("X").with_title("Intern")],
        )];

        let directory = aggregate(&analyses);
        let entry = directory.get("X").unwrap();
        assert_eq!(entry.job_count, 0);
        assert!(entry.job_titles.contains("Intern"));
    }

    #[test]
    fn test_reported_count_not_derived_from_titles() {
        let analyses = vec![SourceAnalysis::with_companies(
            "a.md",
            vec![acme(5, &["SDR", "AE"])],
        )];
        assert_eq!(aggregate(&analyses).get("Acme").unwrap().job_count, 5);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let analyses = vec![SourceAnalysis::with_companies(
            "a.md",
            vec![
                CompanyRecord::new("Acme").with_job_count(1),
                CompanyRecord::new("ACME").with_job_count(1),
            ],
        )];
        assert_eq!(aggregate(&analyses).total_companies, 2);
    }

    #[test]
    fn test_empty_input() {
        let directory = aggregate(&Vec::<SourceAnalysis>::new());
        assert!(directory.is_empty());
        assert_eq!(directory.total_jobs, 0);
    }
}
