//! Parse raw extractor output into structured data.
//!
//! Models tend to wrap their JSON in prose or code fences. The parser takes
//! the span from the first `{` to the last `}` and parses only that.

use serde_json::Value;

use crate::error::ParseFailure;
use crate::types::company::ExtractionPayload;

/// Locate the outermost `{ ... }` span in `raw`.
///
/// Returns `None` when there is no `{`, or the last `}` comes before it.
pub fn locate_json(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parse the JSON object embedded in an extraction response.
pub fn parse_extraction_response(raw: &str) -> Result<Value, ParseFailure> {
    let json = locate_json(raw).ok_or_else(|| ParseFailure::NoJsonFound {
        raw_response: raw.to_string(),
    })?;

    serde_json::from_str(json).map_err(|source| ParseFailure::InvalidJson {
        source,
        raw_response: raw.to_string(),
    })
}

/// Parse an extraction response and normalize it into a payload.
pub fn parse_payload(raw: &str) -> Result<ExtractionPayload, ParseFailure> {
    parse_extraction_response(raw).map(|value| ExtractionPayload::from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json() {
        let value = parse_extraction_response(r#"{"companies": []}"#).unwrap();
        assert!(value["companies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_in_code_fence() {
        let raw = "Here is the analysis:\n```json\n{\"companies\": [{\"name\": \"Acme\", \"job_count\": 2}]}\n```\nLet me know!";
        let payload = parse_payload(raw).unwrap();
        assert_eq!(payload.companies.len(), 1);
        assert_eq!(payload.companies[0].name, "Acme");
        assert_eq!(payload.companies[0].job_count, 2);
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let raw = r#"prefix {"a": {"b": 1}} suffix"#;
        assert_eq!(locate_json(raw), Some(r#"{"a": {"b": 1}}"#));
    }

    #[test]
    fn test_no_opening_brace() {
        let err = parse_extraction_response("I could not find any companies.").unwrap_err();
        assert!(matches!(err, ParseFailure::NoJsonFound { .. }));
        assert_eq!(err.raw_response(), "I could not find any companies.");
    }

    #[test]
    fn test_closing_brace_before_opening() {
        assert_eq!(locate_json("} nothing {"), None);
        assert!(matches!(
            parse_extraction_response("} nothing {"),
            Err(ParseFailure::NoJsonFound { .. })
        ));
    }

    #[test]
    fn test_truncated_json_is_invalid() {
        let raw = r#"{"companies": [{"name": "Acme", "job_count": 2}"#;
        // last '}' closes the company, leaving the outer object unterminated
        let err = parse_extraction_response(raw).unwrap_err();
        assert!(matches!(err, ParseFailure::InvalidJson { .. }));
        assert_eq!(err.raw_response(), raw);
    }

    #[test]
    fn test_two_objects_fail_to_parse() {
        let raw = r#"{"a": 1} and also {"b": 2}"#;
        assert!(matches!(
            parse_extraction_response(raw),
            Err(ParseFailure::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_non_ascii_around_json() {
        let raw = "Résumé → {\"companies\": [{\"name\": \"Café Co\"}]} ✓";
        let payload = parse_payload(raw).unwrap();
        assert_eq!(payload.companies[0].name, "Café Co");
        assert_eq!(payload.companies[0].job_count, 0);
    }
}
