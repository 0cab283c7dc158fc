use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::ocr::OcrError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("No text could be extracted from the image")]
    NoText,

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedMedia(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::NoText => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_TEXT",
                "No text could be extracted from the image".to_string(),
            ),
            AppError::Ocr(e) => {
                tracing::error!("OCR error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "OCR_ERROR",
                    "Error with OCR service. Please try again.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::UnsupportedMedia("gif".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (AppError::NoText, StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::Ocr(OcrError::NoResults), StatusCode::BAD_GATEWAY),
            (AppError::Llm("boom".into()), StatusCode::BAD_GATEWAY),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_llm_error_converts_with_message() {
        let err: AppError = LlmError::NoChoices.into();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("no choices")));
    }
}
