use serde_json::Value;

use crate::errors::ExtractionError;

/// Pulls the JSON object out of raw LLM text. The model is instructed to
/// return bare JSON but frequently wraps it in prose or markdown fences, so
/// the span from the first `{` to the last `}` is taken before parsing.
/// Sibling top-level objects therefore yield an unparsable span; that is
/// accepted behavior, not repaired. The parsed value is returned untyped:
/// schema conformance is the caller's responsibility.
pub fn extract_json(raw: &str) -> Result<Value, ExtractionError> {
    let (first, last) = match (raw.find('{'), raw.rfind('}')) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ExtractionError::NoJsonFound {
                raw: raw.to_string(),
            })
        }
    };

    // Both indices sit on ASCII braces, so the slice is char-boundary safe.
    let span = if last >= first { &raw[first..=last] } else { "" };

    serde_json::from_str(span).map_err(|source| ExtractionError::MalformedJson {
        raw: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_bare_json() {
        let value = extract_json(r#"{"type":"general","answer":"hi"}"#).unwrap();
        assert_eq!(value, json!({"type": "general", "answer": "hi"}));
    }

    #[test]
    fn extracts_json_wrapped_in_prose_and_fences() {
        let raw = "Sure! Here is the recommendation:\n```json\n{\"type\":\"portfolio\",\"riskScore\":5}\n```\nLet me know if you need more.";
        let value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"type": "portfolio", "riskScore": 5}));
    }

    #[test]
    fn round_trips_nested_objects() {
        let original = json!({
            "type": "portfolio",
            "allocation": {"equity_percent": 45, "debt_percent": 30},
            "risks": ["volatility"]
        });
        let raw = format!("prefix text {} suffix text", original);
        assert_eq!(extract_json(&raw).unwrap(), original);
    }

    #[test]
    fn missing_braces_is_no_json_found() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, ExtractionError::NoJsonFound { .. }));
        assert_eq!(err.raw_text(), "no json here");
    }

    #[test]
    fn unparsable_span_is_malformed_json() {
        let err = extract_json("{not valid json}").unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedJson { .. }));
        assert_eq!(err.raw_text(), "{not valid json}");
    }

    #[test]
    fn closing_brace_before_opening_is_malformed() {
        let err = extract_json("} oops {").unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedJson { .. }));
    }

    #[test]
    fn sibling_objects_are_rejected_not_repaired() {
        let err = extract_json(r#"{"a":1} {"b":2}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedJson { .. }));
    }
}
