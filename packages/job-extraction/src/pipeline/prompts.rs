//! LLM prompts for company/job extraction.

/// Prompt for extracting hiring companies from a job-listing page.
pub const EXTRACT_PROMPT: &str = r#"Analyze the following job listing content and extract a list of all companies mentioned.
For each company, provide:
1. Company name
2. Number of job listings for this company (count how many times it appears)
3. Job titles associated with this company

Format your response as a JSON object with the following structure:
{
    "companies": [
        {
            "name": "Company Name",
            "job_count": 3,
            "job_titles": ["Sales Development Representative", "SDR Team Lead", "etc"]
        }
    ],
    "total_companies": 15,
    "total_jobs": 25
}

Only include companies that are hiring for jobs, not companies mentioned in other contexts.
Here's the content:

"#;

/// Marker appended to content cut by [`truncate_content`].
pub const TRUNCATION_MARKER: &str = "...[content truncated due to length]";

/// Cut `content` to at most `max_len` bytes, on a char boundary.
///
/// Content that fits is returned unchanged; otherwise the marker is
/// appended after the cut.
pub fn truncate_content(content: &str, max_len: usize) -> String {
    if content.len() <= max_len {
        return content.to_string();
    }

    let mut cut = max_len;
    while !content.is_char_boundary(cut) {
        cut -= 1;
    }

    let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
    truncated.push_str(&content[..cut]);
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Build the full extraction prompt for a (possibly truncated) document.
pub fn format_extract_prompt(content: &str) -> String {
    let mut prompt = String::with_capacity(EXTRACT_PROMPT.len() + content.len());
    prompt.push_str(EXTRACT_PROMPT);
    prompt.push_str(content);
    prompt
}
