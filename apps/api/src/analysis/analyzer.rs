//! Product analysis — orchestrates the full scoring pipeline.
//!
//! Flow: OCR → three category prompts (issued concurrently) → score extraction →
//!       category means → overall score → recommendations when overall < 7.
//!
//! Nothing is persisted; the report lives for the length of one request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::aggregate::{mean, needs_recommendations, overall};
use crate::analysis::category::Category;
use crate::analysis::extractor::{extract, ScoreTable};
use crate::analysis::prompts::{category_prompt, recommendations_prompt};
use crate::analysis::rating::{classify, colorize, Rating, ScoreColor};
use crate::errors::AppError;
use crate::llm_client::{ChatCompletion, GenerationParams, LlmError};
use crate::ocr::{TextRecognizer, UploadedImage};

// ────────────────────────────────────────────────────────────────────────────
// Report models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ParameterScore {
    pub parameter: String,
    pub score: f64,
    pub color: ScoreColor,
}

/// Scores for one category. `error` is set when the model call failed;
/// the table is then empty and the mean is 0.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub title: &'static str,
    pub parameters: Vec<ParameterScore>,
    pub mean: f64,
    pub headline: &'static str,
    pub color: ScoreColor,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub company: CategoryReport,
    pub ingredients: CategoryReport,
    pub packaging: CategoryReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallReport {
    pub score: f64,
    pub rating: Rating,
    pub rating_label: &'static str,
    pub color: ScoreColor,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub extracted_text: String,
    pub categories: CategoryResult,
    pub overall: OverallReport,
    pub recommendations: Option<String>,
    pub recommendations_error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs OCR on the image, then the text analysis.
pub async fn analyze_image(
    recognizer: &dyn TextRecognizer,
    llm: &dyn ChatCompletion,
    params: &GenerationParams,
    image: UploadedImage,
) -> Result<AnalysisReport, AppError> {
    let text = recognizer.recognize_text(image).await?;
    info!("Text extraction complete ({} characters)", text.len());
    analyze_text(llm, params, &text).await
}

/// Scores already-extracted product text.
pub async fn analyze_text(
    llm: &dyn ChatCompletion,
    params: &GenerationParams,
    text: &str,
) -> Result<AnalysisReport, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::NoText);
    }

    let (company, ingredients, packaging) = tokio::join!(
        score_category(llm, params, Category::Company, text),
        score_category(llm, params, Category::Ingredients, text),
        score_category(llm, params, Category::Packaging, text),
    );

    if let (Err(c), Err(i), Err(p)) = (&company, &ingredients, &packaging) {
        return Err(AppError::Llm(format!(
            "all category analyses failed: company: {c}; ingredients: {i}; packaging: {p}"
        )));
    }

    let categories = CategoryResult {
        company: category_report(Category::Company, company),
        ingredients: category_report(Category::Ingredients, ingredients),
        packaging: category_report(Category::Packaging, packaging),
    };

    let overall_score = overall(
        categories.company.mean,
        categories.ingredients.mean,
        categories.packaging.mean,
    );
    let rating = classify(overall_score);
    info!("Overall sustainability score: {overall_score:.1}/10 ({rating:?})");

    let (recommendations, recommendations_error) = if needs_recommendations(overall_score) {
        match request_recommendations(llm, params, text, overall_score, &categories).await {
            Ok(text) => (Some(text), None),
            Err(e) => {
                warn!("Recommendations request failed: {e}");
                (None, Some(e.to_string()))
            }
        }
    } else {
        (None, None)
    };

    Ok(AnalysisReport {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        extracted_text: text.to_string(),
        categories,
        overall: OverallReport {
            score: overall_score,
            rating,
            rating_label: rating.label(),
            color: colorize(overall_score),
        },
        recommendations,
        recommendations_error,
    })
}

async fn score_category(
    llm: &dyn ChatCompletion,
    params: &GenerationParams,
    category: Category,
    text: &str,
) -> Result<ScoreTable, LlmError> {
    let prompt = category_prompt(category, text);
    let reply = llm.complete(&prompt, params).await?;
    let table = extract(&reply);
    info!(
        "{} scored: {} parameters parsed",
        category.title(),
        table.len()
    );
    Ok(table)
}

async fn request_recommendations(
    llm: &dyn ChatCompletion,
    params: &GenerationParams,
    text: &str,
    overall_score: f64,
    categories: &CategoryResult,
) -> Result<String, LlmError> {
    let prompt = recommendations_prompt(
        text,
        overall_score,
        categories.company.mean,
        categories.ingredients.mean,
        categories.packaging.mean,
    );
    llm.complete(&prompt, params).await
}

fn category_report(category: Category, outcome: Result<ScoreTable, LlmError>) -> CategoryReport {
    let (table, error) = match outcome {
        Ok(table) => (table, None),
        Err(e) => {
            warn!("{} analysis failed: {e}", category.title());
            (ScoreTable::default(), Some(e.to_string()))
        }
    };

    let category_mean = mean(&table);
    CategoryReport {
        category,
        title: category.title(),
        parameters: table
            .iter()
            .map(|(parameter, score)| ParameterScore {
                parameter: parameter.to_string(),
                score,
                color: colorize(score),
            })
            .collect(),
        mean: category_mean,
        headline: category.headline(category_mean),
        color: colorize(category_mean),
        error,
    }
}
