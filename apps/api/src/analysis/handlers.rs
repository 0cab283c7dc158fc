//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::analysis::analyzer::{analyze_image, analyze_text, AnalysisReport};
use crate::errors::AppError;
use crate::ocr::UploadedImage;
use crate::state::AppState;

/// Multipart field carrying the product photo.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// POST /api/v1/analyze
///
/// Accepts a JPEG or PNG product photo in the `image` multipart field and
/// returns the full sustainability report.
pub async fn handle_analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(IMAGE_FIELD) {
            image = Some(read_image(field).await?);
            break;
        }
    }

    let image = image.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{IMAGE_FIELD}' is required"))
    })?;

    let report = analyze_image(
        state.ocr.as_ref(),
        state.llm.as_ref(),
        &state.generation,
        image,
    )
    .await?;

    Ok(Json(report))
}

/// POST /api/v1/analyze/text
///
/// Scores text that was extracted elsewhere; skips OCR.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let report = analyze_text(state.llm.as_ref(), &state.generation, &request.text).await?;
    Ok(Json(report))
}

async fn read_image(field: Field<'_>) -> Result<UploadedImage, AppError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let content_type = image_content_type(field.content_type(), &file_name).ok_or_else(|| {
        AppError::UnsupportedMedia("supported formats: JPG, JPEG, PNG".to_string())
    })?;

    let bytes = field.bytes().await.map_err(multipart_error)?;
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded image is empty".to_string()));
    }

    Ok(UploadedImage {
        bytes,
        file_name,
        content_type: content_type.to_string(),
    })
}

/// Resolves the upload to `image/jpeg` or `image/png`, trusting an explicit
/// image content type first and the file extension otherwise.
fn image_content_type(declared: Option<&str>, file_name: &str) -> Option<&'static str> {
    match declared.map(|ct| ct.to_ascii_lowercase()).as_deref() {
        Some("image/jpeg" | "image/jpg" | "image/pjpeg") => return Some("image/jpeg"),
        Some("image/png") => return Some("image/png"),
        Some("application/octet-stream") | None => {}
        Some(_) => return None,
    }

    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
    }
}
