//! OCR client — extracts printed text from an uploaded product photo.
//!
//! Speaks the OCR.space `parse/image` multipart API: the image goes in a
//! `file` part, the key and language as plain form fields. Calls are never retried.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("OCR service returned no parsed results")]
    NoResults,
}

/// An uploaded image, as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Bytes,
    pub file_name: String,
    pub content_type: String,
}

/// Text recognition backend.
///
/// Carried in `AppState` as `Arc<dyn TextRecognizer>`.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize_text(&self, image: UploadedImage) -> Result<String, OcrError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OcrResponse {
    #[serde(default)]
    parsed_results: Option<Vec<ParsedResult>>,
    #[serde(default)]
    is_errored_on_processing: bool,
    #[serde(default)]
    error_message: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedResult {
    #[serde(default)]
    parsed_text: String,
}

/// OCR.space reports errors either as a string or as a list of strings.
fn error_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        _ => "unknown error".to_string(),
    }
}

#[derive(Clone)]
pub struct OcrClient {
    client: Client,
    api_url: String,
    api_key: String,
    language: String,
}

impl OcrClient {
    pub fn new(
        api_url: String,
        api_key: String,
        language: String,
        timeout: Duration,
    ) -> Result<Self, OcrError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
            language,
        })
    }
}

#[async_trait]
impl TextRecognizer for OcrClient {
    async fn recognize_text(&self, image: UploadedImage) -> Result<String, OcrError> {
        info!(
            "Sending {} ({} bytes) to OCR",
            image.file_name,
            image.bytes.len()
        );

        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;
        let form = Form::new()
            .text("apikey", self.api_key.clone())
            .text("language", self.language.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.api_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OcrError::Status {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: OcrResponse = response.json().await?;

        if body.is_errored_on_processing {
            return Err(OcrError::Processing(error_text(body.error_message.as_ref())));
        }

        let text = body
            .parsed_results
            .and_then(|results| results.into_iter().next())
            .map(|first| first.parsed_text)
            .ok_or(OcrError::NoResults)?;

        debug!("OCR extracted {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OcrClient {
        OcrClient::new(
            format!("{}/parse/image", server.uri()),
            "ocr-key".to_string(),
            "eng".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn image() -> UploadedImage {
        UploadedImage {
            bytes: Bytes::from_static(b"fake png bytes"),
            file_name: "label.png".to_string(),
            content_type: "image/png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_returns_first_parsed_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/parse/image"))
            .and(body_string_contains("ocr-key"))
            .and(body_string_contains("label.png"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ParsedResults": [
                    {"ParsedText": "Organic oats\nRecyclable box", "FileParseExitCode": 1},
                    {"ParsedText": "second page"}
                ],
                "OCRExitCode": 1,
                "IsErroredOnProcessing": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).recognize_text(image()).await.unwrap();
        assert_eq!(text, "Organic oats\nRecyclable box");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
            .mount(&server)
            .await;

        let err = client_for(&server).recognize_text(image()).await.unwrap_err();
        assert!(matches!(err, OcrError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_empty_results_is_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ParsedResults": [],
                "OCRExitCode": 1,
                "IsErroredOnProcessing": false
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).recognize_text(image()).await.unwrap_err();
        assert!(matches!(err, OcrError::NoResults));
    }

    #[tokio::test]
    async fn test_processing_error_joins_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "OCRExitCode": 3,
                "IsErroredOnProcessing": true,
                "ErrorMessage": ["File too large", "Max 1MB"]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).recognize_text(image()).await.unwrap_err();
        match err {
            OcrError::Processing(msg) => assert_eq!(msg, "File too large; Max 1MB"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_text_variants() {
        assert_eq!(error_text(Some(&json!("oops"))), "oops");
        assert_eq!(error_text(None), "unknown error");
    }
}
