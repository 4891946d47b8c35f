use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::LlmError;
use crate::models::{AdvisoryRequest, AdvisoryResult, GenerationError};
use crate::services::llm_service::{GeminiProvider, LlmConfig, TextGenerator};
use crate::services::{extractor, fallback, prompt};

/// What the orchestrator hands to the HTTP layer: either the untyped JSON
/// extracted from LLM output, passed through as-is, or a locally generated
/// result. Serialized untagged so both look the same on the wire.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AdvisoryReply {
    Generated(Value),
    Local(AdvisoryResult),
}

/// Single entry point for advisory generation. Holds the immutable LLM
/// credential decided at startup; requests share no other state, so the
/// service can serve them concurrently without coordination.
pub struct AdvisoryService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl AdvisoryService {
    pub fn new(config: LlmConfig) -> Self {
        let generator = match &config.api_key {
            Some(api_key) => {
                info!("LLM generation enabled (model: {})", config.model);
                let provider =
                    GeminiProvider::new(api_key.clone(), config.model.clone(), config.timeout);
                Some(Arc::new(provider) as Arc<dyn TextGenerator>)
            }
            None => {
                warn!("No GEMINI_API_KEY set; every request will use the local fallback generator");
                None
            }
        };

        Self { generator }
    }

    /// Builds the service around a caller-supplied generator.
    #[cfg(test)]
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    fn generator(&self) -> Result<&Arc<dyn TextGenerator>, LlmError> {
        self.generator.as_ref().ok_or(LlmError::MissingCredential)
    }

    /// Generates a reply for one request. Never fails: an unreachable LLM
    /// degrades to the fallback generator, and unusable LLM output becomes
    /// the error variant so callers can tell the two failure classes apart.
    pub async fn handle(&self, request: AdvisoryRequest) -> AdvisoryReply {
        let generator = match self.generator() {
            Ok(generator) => generator,
            Err(e) => {
                info!("{}; using local fallback generator", e);
                return AdvisoryReply::Local(fallback::generate(&request));
            }
        };

        let prompt = prompt::build_prompt(&request);
        let raw_text = match generator.generate_text(&prompt).await {
            Ok(raw_text) => raw_text,
            Err(e) => {
                warn!("LLM call failed: {}; returning fallback response", e);
                return AdvisoryReply::Local(
                    fallback::generate(&request)
                        .with_notice("LLM request failed; returned fallback response."),
                );
            }
        };

        // The LLM answered. From here on a bad payload is surfaced, not
        // papered over with canned data: the caller must be able to tell
        // "LLM unreachable" apart from "LLM produced garbage".
        match extractor::extract_json(&raw_text) {
            Ok(value) => AdvisoryReply::Generated(value),
            Err(e) => {
                warn!("Unusable LLM output: {}", e);
                AdvisoryReply::Local(AdvisoryResult::Error(GenerationError {
                    message: e.to_string(),
                    raw_text: e.raw_text().to_string(),
                }))
            }
        }
    }
}
