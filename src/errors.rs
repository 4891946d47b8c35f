use thiserror::Error;

/// Failures of the outbound text-generation call. All of these are recovered
/// locally: `MissingCredential` routes to the fallback generator silently,
/// the rest route to it with a notice attached to the result.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no LLM API key configured")]
    MissingCredential,
    #[error("LLM request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("LLM API error: {0}")]
    Api(String),
    #[error("invalid response structure from LLM: {0}")]
    InvalidResponse(String),
    #[error("empty response from LLM")]
    EmptyResponse,
}

/// Failures locating or parsing the JSON object inside raw LLM text. Both
/// carry the full raw payload so it can be surfaced to the caller for
/// diagnosis instead of being silently replaced with canned data.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in LLM response")]
    NoJsonFound { raw: String },
    #[error("failed to parse LLM output as JSON: {source}")]
    MalformedJson {
        raw: String,
        source: serde_json::Error,
    },
}

impl ExtractionError {
    pub fn raw_text(&self) -> &str {
        match self {
            ExtractionError::NoJsonFound { raw } => raw,
            ExtractionError::MalformedJson { raw, .. } => raw,
        }
    }
}
