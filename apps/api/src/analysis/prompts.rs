// All LLM prompt templates for the analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::analysis::category::Category;
use crate::llm_client::prompts::{bullet_list, SCORE_FORMAT_INSTRUCTION};

/// Category scoring prompt. Replace `{noun}`, `{product_text}`, `{parameters}`
/// and `{format}` before sending.
pub const CATEGORY_PROMPT_TEMPLATE: &str = "\
Analyze this product text and rate each {noun} parameter on a scale of 1-10:
Text: '{product_text}'
Parameters to rate:
{parameters}

{format}";

/// Recommendations prompt. Replace `{product_text}`, `{overall}`, `{company}`,
/// `{ingredients}` and `{packaging}` before sending.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = "\
Based on the following product information and scores, suggest 3-4 specific sustainable alternatives.
Focus on addressing the weakest areas. Format recommendations as bullet points.

Product Text: {product_text}
Overall Sustainability Score: {overall}/10

Category Scores:
Company Impact: {company}/10
Ingredients Quality: {ingredients}/10
Packaging Impact: {packaging}/10

Provide specific brand names and explain why each alternative is more sustainable.";

pub fn category_prompt(category: Category, product_text: &str) -> String {
    // product_text goes in last so braces inside OCR output are never substituted
    CATEGORY_PROMPT_TEMPLATE
        .replace("{noun}", category.prompt_noun())
        .replace("{parameters}", &bullet_list(category.parameters()))
        .replace("{format}", SCORE_FORMAT_INSTRUCTION)
        .replace("{product_text}", product_text)
}

pub fn recommendations_prompt(
    product_text: &str,
    overall: f64,
    company: f64,
    ingredients: f64,
    packaging: f64,
) -> String {
    RECOMMENDATIONS_PROMPT_TEMPLATE
        .replace("{overall}", &format!("{overall:.1}"))
        .replace("{company}", &format!("{company:.1}"))
        .replace("{ingredients}", &format!("{ingredients:.1}"))
        .replace("{packaging}", &format!("{packaging:.1}"))
        .replace("{product_text}", product_text)
}
