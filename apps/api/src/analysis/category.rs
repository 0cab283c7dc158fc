//! The three scoring categories and the fixed parameters each one rates.

use serde::Serialize;

/// Category means at or above this get the positive headline.
const HEADLINE_THRESHOLD: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Company,
    Ingredients,
    Packaging,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::Company => "Company Impact",
            Category::Ingredients => "Ingredients Quality",
            Category::Packaging => "Packaging Impact",
        }
    }

    /// Singular noun used inside the scoring prompt ("rate each company parameter").
    pub fn prompt_noun(self) -> &'static str {
        match self {
            Category::Company => "company",
            Category::Ingredients => "ingredient",
            Category::Packaging => "packaging",
        }
    }

    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Category::Company => &[
                "Environmental Impact",
                "Supply Chain Responsibility",
                "Product Lifecycle",
                "Social Responsibility and Ethics",
                "Sustainability Reporting and Certification",
            ],
            Category::Ingredients => &[
                "Sourcing and Origin",
                "Environmental Impact of Production",
                "Ethical Labor Practices",
                "Health and Safety",
                "Toxicity",
            ],
            Category::Packaging => &[
                "Material Sustainability",
                "Recyclability and Circular Economy",
                "Reduction in Material Use",
                "Energy and Water Consumption in Production",
                "Brand Transparency and Certifications",
            ],
        }
    }

    /// Short verdict shown next to the category mean.
    pub fn headline(self, mean: f64) -> &'static str {
        if mean < HEADLINE_THRESHOLD {
            return "Needs Improvement";
        }
        match self {
            Category::Company => "Environmental & Social",
            Category::Ingredients => "Sustainable Sourcing",
            Category::Packaging => "Eco-Friendly",
        }
    }
}
