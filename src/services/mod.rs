pub mod advisor;
pub mod extractor;
pub mod fallback;
pub mod llm_service;
pub mod prompt;
