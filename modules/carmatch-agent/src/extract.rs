//! Deterministic extraction of typed results from free-text model output.
//!
//! The model is instructed to return bare JSON (generation) or a bare
//! identifier / sentinel phrase (search), but its output is never trusted
//! to be strictly formatted. This layer's contract is best-effort
//! deterministic extraction with explicit failure on ambiguity — it never
//! attempts lenient repair.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use carmatch_common::CarMatchError;

static NO_CAR_FOUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)No car found").unwrap());

/// Outcome of classifying a search response. `Found` carries the raw
/// identifier text; membership in the catalog snapshot is checked by the
/// search pipeline, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(String),
    NotFound,
}

/// Extract the first JSON object embedded in `text`.
///
/// Scans from the first `{` with a string-aware brace-depth counter to the
/// matching `}`, then parses the span. Prose before or after the object is
/// discarded; if the model emits multiple JSON fragments, only the first
/// is considered.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, CarMatchError> {
    let start = text.find('{').ok_or_else(|| {
        CarMatchError::Extraction("no JSON object found in model response".to_string())
    })?;

    let span = object_span(&text[start..]).ok_or_else(|| {
        CarMatchError::Extraction("unterminated JSON object in model response".to_string())
    })?;

    let value: Value =
        serde_json::from_str(span).map_err(|e| CarMatchError::Parse(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        // Unreachable for a span starting with '{', but serde is the authority.
        _ => Err(CarMatchError::Parse(
            "extracted span is not a JSON object".to_string(),
        )),
    }
}

/// Return the balanced `{...}` span at the start of `text`, or `None` if
/// the opening brace never closes. Braces inside string literals (and
/// escaped quotes inside them) do not affect the depth count.
fn object_span(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Classify a search response: the literal sentinel phrase anywhere in the
/// text (case-insensitive) means no match; anything else is taken verbatim,
/// trimmed, as the identifier.
pub fn classify_search_response(text: &str) -> SearchOutcome {
    if NO_CAR_FOUND_RE.is_match(text) {
        return SearchOutcome::NotFound;
    }
    SearchOutcome::Found(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bare_object() {
        let map = extract_json_object(r#"{"name":"Tesla Model 3","brand":"Tesla"}"#).unwrap();
        assert_eq!(map["name"], "Tesla Model 3");
        assert_eq!(map["brand"], "Tesla");
    }

    #[test]
    fn test_extract_object_surrounded_by_prose() {
        let text = r#"Here you go: {"name":"Tesla Model 3","brand":"Tesla"} Hope this helps!"#;
        let map = extract_json_object(text).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["brand"], "Tesla");
    }

    #[test]
    fn test_extract_nested_object() {
        let text = r#"{"name":"X5","specs":{"doors":4,"seats":5}}"#;
        let map = extract_json_object(text).unwrap();
        assert_eq!(map["specs"]["doors"], 4);
    }

    #[test]
    fn test_extract_braces_inside_strings() {
        let text = r#"{"description":"classic {vintage} body","name":"MG B"}"#;
        let map = extract_json_object(text).unwrap();
        assert_eq!(map["description"], "classic {vintage} body");
    }

    #[test]
    fn test_extract_first_of_multiple_fragments() {
        let text = r#"{"a":1} and also {"b":2}"#;
        let map = extract_json_object(text).unwrap();
        assert_eq!(map["a"], 1);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_no_braces_is_extraction_error() {
        let err = extract_json_object("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, CarMatchError::Extraction(_)));
    }

    #[test]
    fn test_unterminated_object_is_extraction_error() {
        let err = extract_json_object(r#"{"name":"Tesla"#).unwrap_err();
        assert!(matches!(err, CarMatchError::Extraction(_)));
    }

    #[test]
    fn test_malformed_object_is_parse_error() {
        let err = extract_json_object(r#"{name: Tesla}"#).unwrap_err();
        assert!(matches!(err, CarMatchError::Parse(_)));
    }

    #[test]
    fn test_classify_not_found_case_insensitive() {
        assert_eq!(
            classify_search_response("Sorry, NO CAR FOUND for that description."),
            SearchOutcome::NotFound
        );
        assert_eq!(
            classify_search_response("no car found"),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn test_classify_found_trims_verbatim() {
        assert_eq!(
            classify_search_response("  c1\n"),
            SearchOutcome::Found("c1".to_string())
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let first = classify_search_response(" c42 ");
        if let SearchOutcome::Found(id) = &first {
            assert_eq!(classify_search_response(id), first);
        } else {
            panic!("expected Found");
        }
    }
}
