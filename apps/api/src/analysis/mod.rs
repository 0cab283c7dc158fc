// Product sustainability analysis.
// Implements: score extraction, aggregation, rating bands, prompts, the pipeline and its handlers.
// All LLM calls go through llm_client; all OCR calls go through ocr.

pub mod aggregate;
pub mod analyzer;
pub mod category;
pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod rating;
