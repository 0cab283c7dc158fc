use std::sync::Arc;

use crate::llm_client::{ChatCompletion, GenerationParams};
use crate::ocr::TextRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup; no per-request state lives here.
#[derive(Clone)]
pub struct AppState {
    /// OCR backend. Default: `OcrClient` against OCR.space.
    pub ocr: Arc<dyn TextRecognizer>,
    /// Hosted-model backend. Default: `LlmClient` against the chat completions endpoint.
    pub llm: Arc<dyn ChatCompletion>,
    pub generation: GenerationParams,
}
